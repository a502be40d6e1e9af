//! 牌型判定與計分引擎

pub mod config;
pub mod game;
pub mod proto;
pub mod service;
