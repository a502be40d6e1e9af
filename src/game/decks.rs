//! 牌組
//!
//! 洗牌後從牌堆頂端抽牌，抽完即止，不會重洗。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::cards::{standard_deck, Card};

/// 一副已洗好的牌
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// 創建標準牌組並洗牌
    pub fn shuffled(rng: &mut StdRng) -> Self {
        let mut cards = standard_deck();
        cards.shuffle(rng);
        Self { cards }
    }

    /// 以指定順序建立牌組，最後一張最先被抽出
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// 抽一張牌（牌組空了回傳 None）
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// 最多抽 `count` 張，順序與逐張抽相同
    pub fn draw_many(&mut self, count: usize) -> Vec<Card> {
        std::iter::from_fn(|| self.draw()).take(count).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

// ============================================================================
// 單元測試
// ============================================================================
