//! 計分服務

use crate::game::{
    active_modifiers, classify, compose, Card, CardId, HandCategory, HandLevels, JokerCard,
    ScoreResult,
};

/// 依選取順序從手牌中取出選中的牌（以 id 比對）
pub fn build_selected_hand(hand: &[Card], selected: &[CardId]) -> Vec<Card> {
    selected
        .iter()
        .filter_map(|id| hand.iter().find(|c| c.id() == *id).copied())
        .collect()
}

/// 一次出牌的判定與計分結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayScore {
    pub category: HandCategory,
    pub result: ScoreResult,
}

impl PlayScore {
    pub fn total(&self) -> i64 {
        self.result.total_score()
    }
}

/// 判定牌型並以持有 Joker 與牌型等級計分
pub fn calculate_play_score(
    selected: &[Card],
    jokers: &[JokerCard],
    hand_levels: &HandLevels,
) -> PlayScore {
    let category = classify(selected);
    let modifiers = active_modifiers(jokers);
    let result = compose(category, selected, hand_levels, &modifiers);

    PlayScore { category, result }
}

// ============================================================================
// 單元測試
// ============================================================================
