//! 對局狀態管理
//!
//! 牌組、手牌、選牌、Joker、牌型等級都在這裡持有與變更；
//! 核心計分函式只讀取這些狀態，不會修改。

use rand::{rngs::StdRng, SeedableRng};

use super::error::RunError;
use super::scoring::{build_selected_hand, calculate_play_score, PlayScore};
use crate::game::{
    Card, CardId, Deck, HandCategory, HandLevels, JokerCard, BLIND_TARGET, DISCARDS_PER_BLIND,
    HAND_SIZE, JOKER_SLOTS, MAX_SELECTED, PLAYS_PER_BLIND,
};

/// 盲注進度
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlindStatus {
    InProgress,
    Cleared,
    Failed,
}

impl BlindStatus {
    /// 轉換為整數 ID（用於傳輸）
    pub fn to_int(self) -> i32 {
        match self {
            BlindStatus::InProgress => 0,
            BlindStatus::Cleared => 1,
            BlindStatus::Failed => 2,
        }
    }

    pub fn is_over(self) -> bool {
        self != BlindStatus::InProgress
    }
}

/// 一局遊戲的狀態
pub struct RunState {
    // 牌組
    pub deck: Deck,
    pub hand: Vec<Card>,
    pub selected: Vec<CardId>,

    // Joker 與牌型等級
    pub jokers: Vec<JokerCard>,
    pub hand_levels: HandLevels,

    // 當前 Blind 狀態
    pub score: i64,
    pub blind_target: i64,
    pub plays_left: i32,
    pub discards_left: i32,

    // 統計
    pub episode_step: i32,
    pub last_play: Option<PlayScore>,
}

impl RunState {
    /// 洗牌、發 8 張手牌並贈送起始 Joker
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_deck(Deck::shuffled(&mut rng))
    }

    /// 以指定牌組開局（牌組最後一張最先被抽出）
    pub fn with_deck(deck: Deck) -> Self {
        let mut state = Self {
            deck,
            hand: Vec::with_capacity(HAND_SIZE),
            selected: Vec::with_capacity(MAX_SELECTED),
            jokers: vec![JokerCard::starter()],
            hand_levels: HandLevels::new(),
            score: 0,
            blind_target: BLIND_TARGET,
            plays_left: PLAYS_PER_BLIND,
            discards_left: DISCARDS_PER_BLIND,
            episode_step: 0,
            last_play: None,
        };
        state.draw_to_hand_size();
        state
    }

    pub fn status(&self) -> BlindStatus {
        if self.score >= self.blind_target {
            BlindStatus::Cleared
        } else if self.plays_left <= 0 {
            BlindStatus::Failed
        } else {
            BlindStatus::InProgress
        }
    }

    fn ensure_in_progress(&self) -> Result<(), RunError> {
        if self.status().is_over() {
            return Err(RunError::RunOver);
        }
        Ok(())
    }

    /// 選牌/取消選牌；回傳操作後該牌是否被選中
    pub fn toggle_selection(&mut self, id: CardId) -> Result<bool, RunError> {
        self.ensure_in_progress()?;

        if !self.hand.iter().any(|c| c.id() == id) {
            return Err(RunError::CardNotInHand(id));
        }

        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
            return Ok(false);
        }

        if self.selected.len() >= MAX_SELECTED {
            return Err(RunError::SelectionFull(MAX_SELECTED));
        }
        self.selected.push(id);
        Ok(true)
    }

    /// 目前選中的牌（依選取順序）
    pub fn selected_cards(&self) -> Vec<Card> {
        build_selected_hand(&self.hand, &self.selected)
    }

    /// 預覽選中牌的牌型與分數，不改變狀態
    pub fn preview_selected(&self) -> PlayScore {
        calculate_play_score(&self.selected_cards(), &self.jokers, &self.hand_levels)
    }

    /// 打出選中的牌
    pub fn play_selected(&mut self) -> Result<PlayScore, RunError> {
        self.ensure_in_progress()?;
        if self.selected.is_empty() {
            return Err(RunError::NothingSelected);
        }
        if self.plays_left <= 0 {
            return Err(RunError::NoPlaysLeft);
        }

        let played = self.selected_cards();
        let play = calculate_play_score(&played, &self.jokers, &self.hand_levels);

        self.score = self.score.saturating_add(play.total());
        self.plays_left -= 1;
        self.last_play = Some(play);

        tracing::debug!(
            hand = %play.category,
            chips = play.result.chips,
            mult = play.result.multiplier,
            total = play.total(),
            score = self.score,
            "played hand"
        );

        self.remove_selected_from_hand();
        self.draw_to_hand_size();
        Ok(play)
    }

    /// 棄掉選中的牌並補牌；回傳棄牌張數
    pub fn discard_selected(&mut self) -> Result<usize, RunError> {
        self.ensure_in_progress()?;
        if self.discards_left <= 0 {
            return Err(RunError::NoDiscardsLeft);
        }
        if self.selected.is_empty() {
            return Err(RunError::NothingSelected);
        }

        self.discards_left -= 1;
        let count = self.remove_selected_from_hand();
        self.draw_to_hand_size();
        Ok(count)
    }

    fn remove_selected_from_hand(&mut self) -> usize {
        let before = self.hand.len();
        let selected = std::mem::take(&mut self.selected);
        self.hand.retain(|c| !selected.contains(&c.id()));
        before - self.hand.len()
    }

    /// 補滿手牌並依點數排序（萬用牌在最右邊）
    pub fn draw_to_hand_size(&mut self) {
        let needed = HAND_SIZE.saturating_sub(self.hand.len());
        if needed > 0 {
            let drawn = self.deck.draw_many(needed);
            self.hand.extend(drawn);
        }
        self.hand.sort_by_key(|c| (c.rank().order_value(), c.suit(), c.id()));
    }

    /// 牌型升級
    pub fn level_up(&mut self, category: HandCategory) {
        self.hand_levels.level_up(category);
    }

    pub fn add_joker(&mut self, joker: JokerCard) -> Result<(), RunError> {
        if self.jokers.len() >= JOKER_SLOTS {
            return Err(RunError::JokerSlotsFull(JOKER_SLOTS));
        }
        self.jokers.push(joker);
        Ok(())
    }

    pub fn remove_joker(&mut self, index: usize) -> Result<JokerCard, RunError> {
        if index >= self.jokers.len() {
            return Err(RunError::JokerNotFound(index));
        }
        Ok(self.jokers.remove(index))
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ModifierEffect, Rank, Suit};

    /// 依抽牌順序建立牌組：`draws[0]` 最先被抽出
    fn state_with_draws(draws: &[(Rank, Suit)]) -> RunState {
        let mut cards: Vec<Card> = draws
            .iter()
            .enumerate()
            .map(|(i, &(r, s))| Card::new(CardId(i as u32), r, s))
            .collect();
        cards.reverse();
        RunState::with_deck(Deck::from_cards(cards))
    }

    fn pair_deck() -> RunState {
        state_with_draws(&[
            (Rank::Seven, Suit::Spades),
            (Rank::Seven, Suit::Hearts),
            (Rank::Two, Suit::Clubs),
            (Rank::Four, Suit::Diamonds),
            (Rank::Nine, Suit::Clubs),
            (Rank::Jack, Suit::Hearts),
            (Rank::Queen, Suit::Spades),
            (Rank::King, Suit::Diamonds),
            (Rank::Ace, Suit::Spades),
            (Rank::Three, Suit::Hearts),
        ])
    }

    #[test]
    fn test_new_run_deals_full_hand() {
        let state = RunState::new(7);
        assert_eq!(state.hand.len(), HAND_SIZE);
        assert_eq!(state.deck.len(), 54 - HAND_SIZE);
        assert_eq!(state.jokers, vec![JokerCard::starter()]);
        assert_eq!(state.plays_left, PLAYS_PER_BLIND);
        assert_eq!(state.discards_left, DISCARDS_PER_BLIND);
        assert_eq!(state.status(), BlindStatus::InProgress);
    }

    #[test]
    fn test_hand_is_sorted_by_rank() {
        let state = pair_deck();
        let values: Vec<u8> = state.hand.iter().map(|c| c.rank().order_value()).collect();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(values, sorted);
    }

    #[test]
    fn test_toggle_selection() {
        let mut state = pair_deck();
        assert_eq!(state.toggle_selection(CardId(0)), Ok(true));
        assert_eq!(state.toggle_selection(CardId(0)), Ok(false));
        assert!(state.selected.is_empty());
        assert_eq!(state.toggle_selection(CardId(9)), Err(RunError::CardNotInHand(CardId(9))));
    }

    #[test]
    fn test_selection_limit() {
        let mut state = pair_deck();
        for id in 0..5 {
            assert_eq!(state.toggle_selection(CardId(id)), Ok(true));
        }
        assert_eq!(
            state.toggle_selection(CardId(5)),
            Err(RunError::SelectionFull(MAX_SELECTED))
        );
    }

    #[test]
    fn test_play_selected_scores_and_redraws() {
        let mut state = pair_deck();
        state.toggle_selection(CardId(0)).unwrap();
        state.toggle_selection(CardId(1)).unwrap();

        let play = state.play_selected().unwrap();
        // Pair: (10 + 14 + 20 起始 Joker) x 2
        assert_eq!(play.category, HandCategory::Pair);
        assert_eq!(play.total(), 88);
        assert_eq!(state.score, 88);
        assert_eq!(state.plays_left, PLAYS_PER_BLIND - 1);
        assert!(state.selected.is_empty());
        assert_eq!(state.hand.len(), HAND_SIZE);
        assert!(!state.hand.iter().any(|c| c.id() == CardId(0) || c.id() == CardId(1)));
        assert_eq!(state.last_play, Some(play));
    }

    #[test]
    fn test_play_requires_selection() {
        let mut state = pair_deck();
        assert_eq!(state.play_selected(), Err(RunError::NothingSelected));
    }

    #[test]
    fn test_discard_selected() {
        let mut state = pair_deck();
        state.toggle_selection(CardId(2)).unwrap();
        assert_eq!(state.discard_selected(), Ok(1));
        assert_eq!(state.discards_left, DISCARDS_PER_BLIND - 1);
        // 從剩下的 2 張補 1 張
        assert_eq!(state.hand.len(), HAND_SIZE);
        assert_eq!(state.deck.len(), 1);
    }

    #[test]
    fn test_discards_run_out() {
        let mut state = RunState::new(3);
        for _ in 0..DISCARDS_PER_BLIND {
            let id = state.hand[0].id();
            state.toggle_selection(id).unwrap();
            state.discard_selected().unwrap();
        }
        let id = state.hand[0].id();
        state.toggle_selection(id).unwrap();
        assert_eq!(state.discard_selected(), Err(RunError::NoDiscardsLeft));
    }

    #[test]
    fn test_blind_failed_after_last_play() {
        let mut state = RunState::new(11);
        state.blind_target = i64::MAX;
        for _ in 0..PLAYS_PER_BLIND {
            let id = state.hand[0].id();
            state.toggle_selection(id).unwrap();
            state.play_selected().unwrap();
        }
        assert_eq!(state.status(), BlindStatus::Failed);
        assert_eq!(state.toggle_selection(state.hand[0].id()), Err(RunError::RunOver));
    }

    #[test]
    fn test_blind_cleared() {
        let mut state = pair_deck();
        state.blind_target = 50;
        state.toggle_selection(CardId(0)).unwrap();
        state.toggle_selection(CardId(1)).unwrap();
        state.play_selected().unwrap();
        assert_eq!(state.status(), BlindStatus::Cleared);
        assert_eq!(state.play_selected(), Err(RunError::RunOver));
    }

    #[test]
    fn test_score_saturates() {
        let mut state = pair_deck();
        state.blind_target = i64::MAX;
        state.score = i64::MAX - 10;
        state.toggle_selection(CardId(0)).unwrap();
        state.toggle_selection(CardId(1)).unwrap();
        state.play_selected().unwrap();
        assert_eq!(state.score, i64::MAX);
        assert_eq!(state.status(), BlindStatus::Cleared);
    }

    #[test]
    fn test_level_up_changes_preview() {
        let mut state = pair_deck();
        state.toggle_selection(CardId(0)).unwrap();
        state.toggle_selection(CardId(1)).unwrap();
        let before = state.preview_selected();
        state.level_up(HandCategory::Pair);
        let after = state.preview_selected();
        assert_eq!(after.result.chips, before.result.chips + 20);
        assert_eq!(after.result.multiplier, before.result.multiplier + 2);
    }

    #[test]
    fn test_joker_slots() {
        let mut state = RunState::new(1);
        for _ in 1..JOKER_SLOTS {
            state.add_joker(JokerCard::new("Joker", 2, ModifierEffect::FlatMult(4))).unwrap();
        }
        assert_eq!(
            state.add_joker(JokerCard::starter()),
            Err(RunError::JokerSlotsFull(JOKER_SLOTS))
        );
        assert_eq!(state.remove_joker(0), Ok(JokerCard::starter()));
        assert_eq!(state.remove_joker(10), Err(RunError::JokerNotFound(10)));
    }
}
