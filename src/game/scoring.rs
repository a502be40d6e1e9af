//! 牌型判定
//!
//! 萬用牌可代替任意點數與任意花色，每張只能用一次。
//! 判定順序固定（見 [`classify`]），同一手牌可能同時滿足多個條件，
//! 先檢查到的牌型勝出。

use super::cards::{Card, Rank};
use super::constants::STRAIGHT_FLUSH_LEN;
use super::hand_types::HandCategory;

/// 判定手牌的牌型
///
/// 空手牌回傳 `HighCard`。張數不限於 5 張，但順子/同花需要至少 5 張。
pub fn classify(cards: &[Card]) -> HandCategory {
    if cards.is_empty() {
        return HandCategory::HighCard;
    }

    let (wild, plain): (Vec<&Card>, Vec<&Card>) = cards.iter().partition(|c| c.is_wild());
    let wild_count = wild.len();
    let total = cards.len();

    // 全部都是萬用牌：彼此代替同一點數
    if plain.is_empty() {
        return match total {
            t if t >= 5 => HandCategory::FiveOfAKind,
            4 => HandCategory::FourOfAKind,
            3 => HandCategory::ThreeOfAKind,
            2 => HandCategory::Pair,
            _ => HandCategory::HighCard,
        };
    }

    let mut rank_counts = [0usize; 13];
    let mut suit_counts = [0usize; 4];
    for card in &plain {
        rank_counts[(card.rank().order_value() - 2) as usize] += 1;
        if let Some(suit) = card.suit() {
            suit_counts[suit.to_index()] += 1;
        }
    }

    let mut counts: Vec<usize> = rank_counts.iter().copied().filter(|&c| c > 0).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let first = counts.first().copied().unwrap_or(0);
    let second = counts.get(1).copied().unwrap_or(0);

    let max_suit = suit_counts.iter().copied().max().unwrap_or(0);

    // 出現過的點數（排序值，升冪、不重複）
    let values: Vec<u8> = Rank::STANDARD
        .iter()
        .filter(|r| rank_counts[(r.order_value() - 2) as usize] > 0)
        .map(|r| r.order_value())
        .collect();

    let enough_cards = total >= STRAIGHT_FLUSH_LEN;
    let can_flush = enough_cards && max_suit + wild_count >= STRAIGHT_FLUSH_LEN;
    let can_straight = enough_cards && straight_reachable(&values, wild_count);

    // 所有萬用牌都補到最大的同點數組
    let best_count = first + wild_count;

    if can_flush && can_straight {
        HandCategory::StraightFlush
    } else if best_count >= 5 {
        HandCategory::FiveOfAKind
    } else if best_count == 4 {
        HandCategory::FourOfAKind
    } else if (first + wild_count >= 3 && second >= 2)
        || (first == 2 && second == 2 && wild_count >= 1)
    {
        HandCategory::FullHouse
    } else if can_flush {
        HandCategory::Flush
    } else if can_straight {
        HandCategory::Straight
    } else if best_count == 3 {
        HandCategory::ThreeOfAKind
    } else if (first == 2 && second == 2) || (first == 2 && second == 1 && wild_count >= 1) {
        HandCategory::TwoPair
    } else if best_count == 2 {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    }
}

/// 檢查能否以最多 `wild_count` 張萬用牌補成 5 張連續點數
///
/// `values` 為升冪且不重複的排序值（A = 14）。A 高與 A 低（A = 1）各自檢查，
/// 任一成立即可。
pub fn straight_reachable(values: &[u8], wild_count: usize) -> bool {
    if window_fits(values, wild_count) {
        return true;
    }

    if values.contains(&14) {
        let mut ace_low: Vec<u8> = values.iter().map(|&v| if v == 14 { 1 } else { v }).collect();
        ace_low.sort_unstable();
        return window_fits(&ace_low, wild_count);
    }

    false
}

/// 任一段跨度小於 5 的點數區間，缺少的張數不超過萬用牌數
fn window_fits(values: &[u8], wild_count: usize) -> bool {
    let len = STRAIGHT_FLUSH_LEN;
    for i in 0..values.len() {
        for j in i..values.len() {
            if usize::from(values[j] - values[i]) >= len {
                break;
            }
            let present = j - i + 1;
            if len - present <= wild_count {
                return true;
            }
        }
    }
    false
}

// ============================================================================
// 單元測試
// ============================================================================
