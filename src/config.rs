//! 伺服器設定
//!
//! 遊戲規則是編譯期常量（`game::constants`）；這裡只處理執行期的伺服器設定，
//! 由環境變數讀入：
//! - `JOKER_SCORE_ADDR`: 監聽位址，預設 `127.0.0.1:50051`
//! - `JOKER_SCORE_LOG`: tracing 過濾規則，預設 `joker_score=info`

use std::net::SocketAddr;

use thiserror::Error;

pub const ADDR_VAR: &str = "JOKER_SCORE_ADDR";
pub const LOG_VAR: &str = "JOKER_SCORE_LOG";

pub const DEFAULT_ADDR: &str = "127.0.0.1:50051";
pub const DEFAULT_LOG_FILTER: &str = "joker_score=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{var} must not be empty")]
    EmptyLogFilter { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub log_filter: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 以任意查詢函式讀取設定（未設定的變數使用預設值）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: raw_addr.clone(),
                source,
            })?;

        let log_filter = lookup(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        if log_filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter { var: LOG_VAR });
        }

        Ok(Self { addr, log_filter })
    }
}

// ============================================================================
// 單元測試
// ============================================================================
