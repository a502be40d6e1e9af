//! 遊戲核心模組
//!
//! 純函式核心，不持有狀態、不做 I/O：
//! - `constants`: 遊戲常量
//! - `cards`: 花色、點數、卡牌與標準牌組
//! - `decks`: 洗牌與抽牌
//! - `hand_types`: 牌型與牌型等級
//! - `scoring`: 牌型判定（含萬用牌）
//! - `joker`: Joker 效果
//! - `compose`: chips / mult 計分組合

pub mod constants;
pub mod cards;
pub mod decks;
pub mod hand_types;
pub mod scoring;
pub mod joker;
pub mod compose;

pub use constants::*;
pub use cards::{Card, CardId, Rank, Suit, standard_deck};
pub use decks::Deck;
pub use hand_types::{HandCategory, HandLevels};
pub use scoring::{classify, straight_reachable};
pub use joker::{AdditiveBonus, JokerCard, ModifierEffect, active_modifiers};
pub use compose::{compose, ScoreResult};
