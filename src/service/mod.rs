//! 服務層模組
//!
//! 提供 gRPC 服務所需的對局狀態管理、快照構建、訊息轉換和計分功能

pub mod convert;
pub mod error;
pub mod observation;
pub mod rpc;
pub mod scoring;
pub mod state;

pub use convert::DecodeError;
pub use error::RunError;
pub use observation::snapshot_from_state;
pub use rpc::ScoreService;
pub use scoring::{build_selected_hand, calculate_play_score, PlayScore};
pub use state::{BlindStatus, RunState};
