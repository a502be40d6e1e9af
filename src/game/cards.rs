//! 卡牌、花色與點數定義
//!
//! 一般牌由點數 + 花色組成；萬用牌（Joker 牌）只有 `Rank::Wild`，沒有花色。
//! 每張牌都帶有唯一的 `CardId`，選牌/移除以 id 判斷，而不是以點數花色判斷。

use std::fmt;

use super::constants::WILDCARDS_PER_DECK;

/// 花色
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// 轉換為整數 ID（用於計數陣列與傳輸）
    pub fn to_index(self) -> usize {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }
}

/// 點數（含萬用牌）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Wild,
}

impl Rank {
    /// 13 種標準點數（不含萬用牌）
    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// 排序值：2..=14（A 為 14），萬用牌為 15 排在最右邊
    pub fn order_value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            Rank::Wild => 15,
        }
    }

    /// 從排序值還原點數
    pub fn from_order_value(value: u8) -> Option<Self> {
        match value {
            2..=14 => Some(Self::STANDARD[(value - 2) as usize]),
            15 => Some(Rank::Wild),
            _ => None,
        }
    }

    /// 基礎 chips：數字牌為點數，人頭牌 10，A 為 11，萬用牌 0
    pub fn chip_value(self) -> i64 {
        match self {
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
            Rank::Wild => 0,
            other => other.order_value() as i64,
        }
    }

    pub fn is_wild(self) -> bool {
        self == Rank::Wild
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Wild => "JOKER",
        }
    }
}

/// 卡牌唯一識別碼
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 單張卡牌
///
/// 欄位不公開：萬用牌永遠沒有花色，只能經由建構函式建立。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    id: CardId,
    rank: Rank,
    suit: Option<Suit>,
}

impl Card {
    /// 建立一張牌；`Rank::Wild` 會忽略傳入的花色
    pub fn new(id: CardId, rank: Rank, suit: Suit) -> Self {
        Self {
            id,
            rank,
            suit: if rank.is_wild() { None } else { Some(suit) },
        }
    }

    /// 建立萬用牌
    pub fn wild(id: CardId) -> Self {
        Self {
            id,
            rank: Rank::Wild,
            suit: None,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    pub fn is_wild(&self) -> bool {
        self.rank.is_wild()
    }

    /// 計分時這張牌貢獻的 chips
    pub fn chips(&self) -> i64 {
        self.rank.chip_value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{}{}", self.rank.label(), suit.symbol()),
            None => f.write_str(self.rank.label()),
        }
    }
}

/// 創建標準牌組：52 張一般牌 + 2 張萬用牌，id 依序遞增
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52 + WILDCARDS_PER_DECK);
    let mut next_id = 0u32;
    for suit in Suit::ALL {
        for rank in Rank::STANDARD {
            deck.push(Card::new(CardId(next_id), rank, suit));
            next_id += 1;
        }
    }
    for _ in 0..WILDCARDS_PER_DECK {
        deck.push(Card::wild(CardId(next_id)));
        next_id += 1;
    }
    deck
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rank_chip_values() {
        assert_eq!(Rank::Two.chip_value(), 2);
        assert_eq!(Rank::Nine.chip_value(), 9);
        assert_eq!(Rank::Ten.chip_value(), 10);
        assert_eq!(Rank::King.chip_value(), 10);
        assert_eq!(Rank::Ace.chip_value(), 11);
        assert_eq!(Rank::Wild.chip_value(), 0);
    }

    #[test]
    fn test_rank_order_values_round_trip() {
        for rank in Rank::STANDARD {
            assert_eq!(Rank::from_order_value(rank.order_value()), Some(rank));
        }
        assert_eq!(Rank::Ace.order_value(), 14);
        assert_eq!(Rank::from_order_value(1), None);
        assert_eq!(Rank::from_order_value(15), Some(Rank::Wild));
    }

    #[test]
    fn test_wild_card_never_has_suit() {
        let wild = Card::new(CardId(1), Rank::Wild, Suit::Hearts);
        assert_eq!(wild.suit(), None);
        assert!(wild.is_wild());
        assert_eq!(wild.chips(), 0);
        assert_eq!(Card::wild(CardId(2)).suit(), None);
    }

    #[test]
    fn test_card_identity_distinguishes_equal_values() {
        let a = Card::wild(CardId(7));
        let b = Card::wild(CardId(8));
        assert_eq!(a.rank(), b.rank());
        assert_ne!(a, b);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(CardId(0), Rank::Seven, Suit::Spades).to_string(), "7♠");
        assert_eq!(Card::new(CardId(0), Rank::Queen, Suit::Hearts).to_string(), "Q♥");
        assert_eq!(Card::wild(CardId(0)).to_string(), "JOKER");
    }

    #[test]
    fn test_standard_deck_composition() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 54);
        assert_eq!(deck.iter().filter(|c| c.is_wild()).count(), WILDCARDS_PER_DECK);

        let ids: HashSet<CardId> = deck.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), deck.len());

        for suit in Suit::ALL {
            assert_eq!(deck.iter().filter(|c| c.suit() == Some(suit)).count(), 13);
        }
    }
}
