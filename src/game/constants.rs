//! 遊戲常量定義

// ============================================================================
// 遊戲規則常量
// ============================================================================

pub const HAND_SIZE: usize = 8;          // 手牌數量
pub const MAX_SELECTED: usize = 5;       // 最多選擇 5 張打出
pub const JOKER_SLOTS: usize = 5;        // Joker 欄位數
pub const PLAYS_PER_BLIND: i32 = 4;      // 每 Blind 出牌次數
pub const DISCARDS_PER_BLIND: i32 = 3;   // 每 Blind 棄牌次數
pub const BLIND_TARGET: i64 = 300;       // 盲注目標分數
pub const WILDCARDS_PER_DECK: usize = 2; // 每副牌的小丑（萬用）牌數量

// ============================================================================
// 牌型判定常量
// ============================================================================

/// 順子/同花所需張數
pub const STRAIGHT_FLUSH_LEN: usize = 5;

// ============================================================================
// 牌型等級常量
// ============================================================================

pub const LEVEL_CHIPS_STEP: i64 = 20;    // 每升一級 +20 chips
pub const LEVEL_MULT_STEP: i64 = 2;      // 每升一級 +2 mult

// ============================================================================
// Action 常量
// ============================================================================

pub const ACTION_TYPE_SELECT: i32 = 0;
pub const ACTION_TYPE_PLAY: i32 = 1;
pub const ACTION_TYPE_DISCARD: i32 = 2;
pub const ACTION_TYPE_LEVEL_UP: i32 = 3;
pub const ACTION_TYPE_ADD_JOKER: i32 = 4;
pub const ACTION_TYPE_SELL_JOKER: i32 = 5;
pub const ACTION_TYPE_END_RUN: i32 = 6;

pub const ACTION_TYPE_COUNT: i32 = 7;
