//! Joker 系統
//!
//! 每張 Joker 升級卡帶有一個不可變的 [`ModifierEffect`]。
//! 計分時依持有順序取出效果：加法效果依序套用，乘法效果在所有加法效果之後才套用。

use std::fmt;

use super::cards::{Card, Rank, Suit};
use super::hand_types::HandCategory;

// ============================================================================
// 效果定義
// ============================================================================

/// Joker 效果
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModifierEffect {
    /// +chips
    FlatChips(i64),
    /// +mult
    FlatMult(i64),
    /// 倍率 x factor
    MultiplyMult(f64),
    /// 每張指定花色的牌 +mult
    PerSuitMult { suit: Suit, per_card: i64 },
    /// 打出指定牌型時 +mult
    PerHandTypeMult { category: HandCategory, amount: i64 },
    /// 每張指定點數的牌 +mult
    PerRankMult { rank: Rank, per_card: i64 },
    /// 有打出牌時 +chips（只加一次）
    FirstPlayedChips(i64),
}

/// 加法效果的結果
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdditiveBonus {
    pub chips: i64,
    pub mult: i64,
}

impl ModifierEffect {
    /// 是否為乘法效果
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, ModifierEffect::MultiplyMult(_))
    }

    /// 計算加法效果；乘法效果回傳零加成
    pub fn additive_bonus(&self, category: HandCategory, played: &[Card]) -> AdditiveBonus {
        let mut bonus = AdditiveBonus::default();

        match *self {
            ModifierEffect::FlatChips(amount) => bonus.chips = amount,
            ModifierEffect::FlatMult(amount) => bonus.mult = amount,
            ModifierEffect::MultiplyMult(_) => {}
            ModifierEffect::PerSuitMult { suit, per_card } => {
                let matching = played.iter().filter(|c| c.suit() == Some(suit)).count();
                bonus.mult = per_card.saturating_mul(matching as i64);
            }
            ModifierEffect::PerHandTypeMult { category: target, amount } => {
                if target == category {
                    bonus.mult = amount;
                }
            }
            ModifierEffect::PerRankMult { rank, per_card } => {
                let matching = played.iter().filter(|c| c.rank() == rank).count();
                bonus.mult = per_card.saturating_mul(matching as i64);
            }
            ModifierEffect::FirstPlayedChips(amount) => {
                if !played.is_empty() {
                    bonus.chips = amount;
                }
            }
        }

        bonus
    }

    /// 給玩家看的效果描述
    pub fn description(&self) -> String {
        match *self {
            ModifierEffect::FlatChips(amount) => format!("{amount:+} Chips"),
            ModifierEffect::FlatMult(amount) => format!("{amount:+} Mult"),
            ModifierEffect::MultiplyMult(factor) => format!("X{factor:.1} Mult"),
            ModifierEffect::PerSuitMult { suit, per_card } => {
                format!("{per_card:+} Mult per {} played", suit.symbol())
            }
            ModifierEffect::PerHandTypeMult { category, amount } => {
                format!("{amount:+} Mult if played hand is {category}")
            }
            ModifierEffect::PerRankMult { rank, per_card } => {
                format!("{per_card:+} Mult per {} played", rank.label())
            }
            ModifierEffect::FirstPlayedChips(amount) => {
                format!("{amount:+} Chips for the first card played")
            }
        }
    }
}

impl fmt::Display for ModifierEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

// ============================================================================
// Joker 卡
// ============================================================================

/// 玩家持有的 Joker 升級卡；名稱、描述、價格與計分無關
#[derive(Clone, Debug, PartialEq)]
pub struct JokerCard {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub effect: ModifierEffect,
}

impl JokerCard {
    /// 以效果描述作為卡片描述
    pub fn new(name: impl Into<String>, price: i64, effect: ModifierEffect) -> Self {
        Self {
            name: name.into(),
            description: effect.description(),
            price,
            effect,
        }
    }

    /// 開局贈送的 Joker：+20 Chips
    pub fn starter() -> Self {
        Self::new("Red Face Joker", 2, ModifierEffect::FlatChips(20))
    }

    /// 內建 Joker 目錄
    pub fn catalog() -> Vec<JokerCard> {
        vec![
            Self::new("Joker", 2, ModifierEffect::FlatMult(4)),
            Self::new(
                "Greedy Joker",
                5,
                ModifierEffect::PerSuitMult { suit: Suit::Diamonds, per_card: 4 },
            ),
            Self::new(
                "Wrathful Joker",
                5,
                ModifierEffect::PerSuitMult { suit: Suit::Spades, per_card: 4 },
            ),
            Self::new("Stuntman", 6, ModifierEffect::FlatChips(100)),
            Self::new("Half Joker", 4, ModifierEffect::FlatMult(20)),
            Self::new("Default Joker", 2, ModifierEffect::FlatChips(20)),
            Self::new(
                "Jolly Joker",
                3,
                ModifierEffect::PerHandTypeMult { category: HandCategory::Pair, amount: 8 },
            ),
            Self::new(
                "Crazy Joker",
                4,
                ModifierEffect::PerHandTypeMult { category: HandCategory::Straight, amount: 12 },
            ),
            Self::new(
                "Scholar",
                4,
                ModifierEffect::PerRankMult { rank: Rank::Ace, per_card: 4 },
            ),
            Self::new("Hanging Chad", 4, ModifierEffect::FirstPlayedChips(30)),
            Self::new("Cavendish", 7, ModifierEffect::MultiplyMult(1.5)),
        ]
    }
}

/// 依持有順序取出 Joker 效果
pub fn active_modifiers(jokers: &[JokerCard]) -> Vec<ModifierEffect> {
    jokers.iter().map(|j| j.effect).collect()
}

// ============================================================================
// 單元測試
// ============================================================================
