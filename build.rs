//! 產生 JokerScore gRPC 服務骨架
//!
//! 訊息型別直接以 prost derive 定義於 `src/proto.rs`，
//! 這裡只描述服務與方法，不需要 protoc。

fn main() {
    let method = |name: &str, route: &str, input: &str, output: &str| {
        tonic_build::manual::Method::builder()
            .name(name)
            .route_name(route)
            .input_type(format!("crate::proto::{input}"))
            .output_type(format!("crate::proto::{output}"))
            .codec_path("tonic::codec::ProstCodec")
            .build()
    };

    let service = tonic_build::manual::Service::builder()
        .name("JokerScore")
        .package("joker_score")
        .method(method("evaluate", "Evaluate", "EvaluateRequest", "EvaluateResponse"))
        .method(method("new_run", "NewRun", "NewRunRequest", "NewRunResponse"))
        .method(method("step", "Step", "StepRequest", "StepResponse"))
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);

    println!("cargo:rerun-if-changed=build.rs");
}
