//! 牌型定義與牌型等級

use std::fmt;

use super::constants::{LEVEL_CHIPS_STEP, LEVEL_MULT_STEP};

/// 牌型，由弱到強排序
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    FiveOfAKind,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::FiveOfAKind,
    ];

    /// 牌型強度 1..=10（HighCard = 1）
    pub fn to_int(self) -> i32 {
        self.to_index() as i32 + 1
    }

    pub fn from_int(value: i32) -> Option<Self> {
        let index = usize::try_from(value.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// 在等級表中的索引
    pub fn to_index(self) -> usize {
        match self {
            HandCategory::HighCard => 0,
            HandCategory::Pair => 1,
            HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::Straight => 4,
            HandCategory::Flush => 5,
            HandCategory::FullHouse => 6,
            HandCategory::FourOfAKind => 7,
            HandCategory::StraightFlush => 8,
            HandCategory::FiveOfAKind => 9,
        }
    }

    /// Level 1 的基礎 chips 和 mult
    pub fn base_values(self) -> (i64, i64) {
        match self {
            HandCategory::HighCard => (5, 1),
            HandCategory::Pair => (10, 2),
            HandCategory::TwoPair => (20, 2),
            HandCategory::ThreeOfAKind => (30, 3),
            HandCategory::Straight => (30, 4),
            HandCategory::Flush => (35, 4),
            HandCategory::FullHouse => (40, 4),
            HandCategory::FourOfAKind => (60, 7),
            HandCategory::StraightFlush => (100, 8),
            HandCategory::FiveOfAKind => (120, 12),
        }
    }

    /// 指定等級的 chips 和 mult（等級小於 1 視為 1）
    pub fn stats_at_level(self, level: u32) -> (i64, i64) {
        let (chips, mult) = self.base_values();
        let extra_levels = level.saturating_sub(1) as i64;
        (
            chips + extra_levels * LEVEL_CHIPS_STEP,
            mult + extra_levels * LEVEL_MULT_STEP,
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FiveOfAKind => "Five of a Kind",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// 牌型等級
// ============================================================================

/// 每種牌型的等級，起始皆為 1，只會上升
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandLevels {
    levels: [u32; 10],
}

impl Default for HandLevels {
    fn default() -> Self {
        Self::new()
    }
}

impl HandLevels {
    pub fn new() -> Self {
        Self { levels: [1; 10] }
    }

    /// 獲取牌型等級
    pub fn get(&self, category: HandCategory) -> u32 {
        self.levels[category.to_index()]
    }

    /// 升級牌型
    pub fn level_up(&mut self, category: HandCategory) {
        let slot = &mut self.levels[category.to_index()];
        *slot = slot.saturating_add(1);
    }

    /// 將等級提升到 `level`；已高於此值則不變
    pub fn raise_to(&mut self, category: HandCategory, level: u32) {
        let slot = &mut self.levels[category.to_index()];
        *slot = (*slot).max(level);
    }

    /// 牌型在目前等級下的 chips 和 mult
    pub fn stats(&self, category: HandCategory) -> (i64, i64) {
        category.stats_at_level(self.get(category))
    }

    /// (牌型, 等級) 列表
    pub fn iter(&self) -> impl Iterator<Item = (HandCategory, u32)> + '_ {
        HandCategory::ALL.iter().map(move |&c| (c, self.get(c)))
    }
}

// ============================================================================
// 單元測試
// ============================================================================
