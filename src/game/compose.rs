//! 計分組合
//!
//! 順序固定：牌型基礎值（含等級）→ 打出的牌 chips → 加法效果（依序）
//! → 乘法效果（依序，每次乘完立即取整）→ 倍率下限 1。
//! 所有整數運算皆為飽和運算，極端的效果數值只會停在 i64 邊界。

use super::cards::Card;
use super::hand_types::{HandCategory, HandLevels};
use super::joker::ModifierEffect;

/// 計分結果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreResult {
    pub chips: i64,
    pub multiplier: i64,
}

impl ScoreResult {
    /// 總分 = chips x mult
    pub fn total_score(&self) -> i64 {
        self.chips.saturating_mul(self.multiplier)
    }
}

/// 計算一手牌的 chips 和 mult
pub fn compose(
    category: HandCategory,
    played: &[Card],
    levels: &HandLevels,
    modifiers: &[ModifierEffect],
) -> ScoreResult {
    let (mut chips, mut mult) = levels.stats(category);

    chips = played.iter().map(Card::chips).fold(chips, i64::saturating_add);

    for effect in modifiers.iter().filter(|m| !m.is_multiplicative()) {
        let bonus = effect.additive_bonus(category, played);
        chips = chips.saturating_add(bonus.chips);
        mult = mult.saturating_add(bonus.mult);
    }

    for effect in modifiers {
        if let ModifierEffect::MultiplyMult(factor) = *effect {
            // `as` 轉換在超出範圍時飽和
            mult = (mult as f64 * factor).floor() as i64;
        }
    }

    ScoreResult {
        chips,
        multiplier: mult.max(1),
    }
}

// ============================================================================
// 單元測試
// ============================================================================
