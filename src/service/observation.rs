//! 對局快照構建
//!
//! 把 `RunState` 轉成傳輸用的 `RunSnapshot`，包含：
//! - 手牌與選牌（依選取順序）
//! - 持有 Joker
//! - 牌型等級
//! - 盲注進度與剩餘次數
//! - 目前選牌的計分預覽

use super::convert::{card_to_msg, joker_to_msg, levels_to_entries, play_to_msg};
use super::state::RunState;
use crate::proto::RunSnapshot;

/// 從對局狀態構建快照
pub fn snapshot_from_state(state: &RunState) -> RunSnapshot {
    let preview = if state.selected.is_empty() {
        None
    } else {
        Some(play_to_msg(&state.preview_selected()))
    };

    RunSnapshot {
        hand: state.hand.iter().map(card_to_msg).collect(),
        selected: state.selected.iter().map(|id| id.0).collect(),
        jokers: state.jokers.iter().map(joker_to_msg).collect(),
        hand_levels: levels_to_entries(&state.hand_levels),
        score: state.score,
        blind_target: state.blind_target,
        plays_left: state.plays_left,
        discards_left: state.discards_left,
        deck_remaining: u32::try_from(state.deck.len()).unwrap_or(u32::MAX),
        status: state.status().to_int(),
        episode_step: state.episode_step,
        preview,
    }
}

// ============================================================================
// 單元測試
// ============================================================================
