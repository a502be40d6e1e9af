use joker_score::config::ServerConfig;
use joker_score::proto::joker_score_server::JokerScoreServer;
use joker_score::service::ScoreService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.log_filter)?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let service = ScoreService::default();

    tracing::info!(addr = %config.addr, "JokerScore gRPC server listening");

    tonic::transport::Server::builder()
        .add_service(JokerScoreServer::new(service))
        .serve(config.addr)
        .await?;

    Ok(())
}
