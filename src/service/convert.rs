//! 傳輸格式與遊戲型別互轉

use thiserror::Error;

use crate::game::{Card, CardId, HandCategory, HandLevels, JokerCard, ModifierEffect, Rank, Suit};
use crate::proto::{
    CardMsg, EvaluateResponse, JokerMsg, LevelEntry, ModifierMsg, MODIFIER_KIND_FIRST_PLAYED_CHIPS,
    MODIFIER_KIND_FLAT_CHIPS, MODIFIER_KIND_FLAT_MULT, MODIFIER_KIND_MULTIPLY_MULT,
    MODIFIER_KIND_PER_HAND_TYPE_MULT, MODIFIER_KIND_PER_RANK_MULT, MODIFIER_KIND_PER_SUIT_MULT,
};
use super::scoring::PlayScore;

/// 無法解讀的傳入訊息
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("unknown rank {0}")]
    Rank(i32),
    #[error("unknown suit {0}")]
    Suit(i32),
    #[error("card {0} needs a suit")]
    MissingSuit(u32),
    #[error("unknown hand type {0}")]
    HandType(i32),
    #[error("unknown modifier kind {0}")]
    ModifierKind(i32),
    #[error("modifier kind {0} is missing field `{1}`")]
    MissingField(i32, &'static str),
    #[error("multiplier factor must be finite, got {0}")]
    Factor(f64),
}

impl From<DecodeError> for tonic::Status {
    fn from(err: DecodeError) -> Self {
        tonic::Status::invalid_argument(err.to_string())
    }
}

pub fn rank_from_int(value: i32) -> Result<Rank, DecodeError> {
    u8::try_from(value)
        .ok()
        .and_then(Rank::from_order_value)
        .ok_or(DecodeError::Rank(value))
}

pub fn suit_from_int(value: i32) -> Result<Suit, DecodeError> {
    usize::try_from(value)
        .ok()
        .and_then(Suit::from_index)
        .ok_or(DecodeError::Suit(value))
}

pub fn hand_type_from_int(value: i32) -> Result<HandCategory, DecodeError> {
    HandCategory::from_int(value).ok_or(DecodeError::HandType(value))
}

pub fn card_from_msg(msg: &CardMsg) -> Result<Card, DecodeError> {
    let id = CardId(msg.id);
    let rank = rank_from_int(msg.rank)?;
    if rank.is_wild() {
        return Ok(Card::wild(id));
    }
    let suit = msg.suit.ok_or(DecodeError::MissingSuit(msg.id))?;
    Ok(Card::new(id, rank, suit_from_int(suit)?))
}

pub fn card_to_msg(card: &Card) -> CardMsg {
    CardMsg {
        id: card.id().0,
        rank: i32::from(card.rank().order_value()),
        suit: card.suit().map(|s| s.to_index() as i32),
    }
}

pub fn modifier_from_msg(msg: &ModifierMsg) -> Result<ModifierEffect, DecodeError> {
    let kind = msg.kind;
    let effect = match kind {
        MODIFIER_KIND_FLAT_CHIPS => ModifierEffect::FlatChips(msg.amount),
        MODIFIER_KIND_FLAT_MULT => ModifierEffect::FlatMult(msg.amount),
        MODIFIER_KIND_MULTIPLY_MULT => {
            if !msg.factor.is_finite() {
                return Err(DecodeError::Factor(msg.factor));
            }
            ModifierEffect::MultiplyMult(msg.factor)
        }
        MODIFIER_KIND_PER_SUIT_MULT => {
            let suit = msg.suit.ok_or(DecodeError::MissingField(kind, "suit"))?;
            ModifierEffect::PerSuitMult {
                suit: suit_from_int(suit)?,
                per_card: msg.amount,
            }
        }
        MODIFIER_KIND_PER_HAND_TYPE_MULT => {
            let hand_type = msg.hand_type.ok_or(DecodeError::MissingField(kind, "hand_type"))?;
            ModifierEffect::PerHandTypeMult {
                category: hand_type_from_int(hand_type)?,
                amount: msg.amount,
            }
        }
        MODIFIER_KIND_PER_RANK_MULT => {
            let rank = msg.rank.ok_or(DecodeError::MissingField(kind, "rank"))?;
            ModifierEffect::PerRankMult {
                rank: rank_from_int(rank)?,
                per_card: msg.amount,
            }
        }
        MODIFIER_KIND_FIRST_PLAYED_CHIPS => ModifierEffect::FirstPlayedChips(msg.amount),
        other => return Err(DecodeError::ModifierKind(other)),
    };
    Ok(effect)
}

pub fn modifier_to_msg(effect: &ModifierEffect) -> ModifierMsg {
    let mut msg = ModifierMsg::default();
    match *effect {
        ModifierEffect::FlatChips(amount) => {
            msg.kind = MODIFIER_KIND_FLAT_CHIPS;
            msg.amount = amount;
        }
        ModifierEffect::FlatMult(amount) => {
            msg.kind = MODIFIER_KIND_FLAT_MULT;
            msg.amount = amount;
        }
        ModifierEffect::MultiplyMult(factor) => {
            msg.kind = MODIFIER_KIND_MULTIPLY_MULT;
            msg.factor = factor;
        }
        ModifierEffect::PerSuitMult { suit, per_card } => {
            msg.kind = MODIFIER_KIND_PER_SUIT_MULT;
            msg.amount = per_card;
            msg.suit = Some(suit.to_index() as i32);
        }
        ModifierEffect::PerHandTypeMult { category, amount } => {
            msg.kind = MODIFIER_KIND_PER_HAND_TYPE_MULT;
            msg.amount = amount;
            msg.hand_type = Some(category.to_int());
        }
        ModifierEffect::PerRankMult { rank, per_card } => {
            msg.kind = MODIFIER_KIND_PER_RANK_MULT;
            msg.amount = per_card;
            msg.rank = Some(i32::from(rank.order_value()));
        }
        ModifierEffect::FirstPlayedChips(amount) => {
            msg.kind = MODIFIER_KIND_FIRST_PLAYED_CHIPS;
            msg.amount = amount;
        }
    }
    msg
}

pub fn joker_to_msg(joker: &JokerCard) -> JokerMsg {
    JokerMsg {
        name: joker.name.clone(),
        description: joker.description.clone(),
        price: joker.price,
        modifier: Some(modifier_to_msg(&joker.effect)),
    }
}

/// 將等級列表套用到預設等級上（只升不降）
pub fn levels_from_entries(entries: &[LevelEntry]) -> Result<HandLevels, DecodeError> {
    let mut levels = HandLevels::new();
    for entry in entries {
        levels.raise_to(hand_type_from_int(entry.hand_type)?, entry.level);
    }
    Ok(levels)
}

pub fn levels_to_entries(levels: &HandLevels) -> Vec<LevelEntry> {
    levels
        .iter()
        .map(|(category, level)| LevelEntry {
            hand_type: category.to_int(),
            level,
        })
        .collect()
}

pub fn play_to_msg(play: &PlayScore) -> EvaluateResponse {
    EvaluateResponse {
        hand_type: play.category.to_int(),
        chips: play.result.chips,
        mult: play.result.multiplier,
        total: play.total(),
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_decoding() {
        let seven = CardMsg { id: 3, rank: 7, suit: Some(1) };
        assert_eq!(
            card_from_msg(&seven),
            Ok(Card::new(CardId(3), Rank::Seven, Suit::Hearts))
        );

        // 萬用牌忽略 suit
        let wild = CardMsg { id: 4, rank: 15, suit: Some(2) };
        assert_eq!(card_from_msg(&wild), Ok(Card::wild(CardId(4))));

        assert_eq!(
            card_from_msg(&CardMsg { id: 5, rank: 1, suit: Some(0) }),
            Err(DecodeError::Rank(1))
        );
        assert_eq!(
            card_from_msg(&CardMsg { id: 6, rank: 9, suit: None }),
            Err(DecodeError::MissingSuit(6))
        );
        assert_eq!(
            card_from_msg(&CardMsg { id: 7, rank: 9, suit: Some(4) }),
            Err(DecodeError::Suit(4))
        );
    }

    #[test]
    fn test_card_encoding_omits_wild_suit() {
        let msg = card_to_msg(&Card::wild(CardId(9)));
        assert_eq!(msg, CardMsg { id: 9, rank: 15, suit: None });
    }

    #[test]
    fn test_modifier_decoding() {
        let per_suit = ModifierMsg {
            kind: MODIFIER_KIND_PER_SUIT_MULT,
            amount: 4,
            suit: Some(2),
            ..Default::default()
        };
        assert_eq!(
            modifier_from_msg(&per_suit),
            Ok(ModifierEffect::PerSuitMult { suit: Suit::Diamonds, per_card: 4 })
        );

        let missing = ModifierMsg {
            kind: MODIFIER_KIND_PER_RANK_MULT,
            amount: 4,
            ..Default::default()
        };
        assert_eq!(
            modifier_from_msg(&missing),
            Err(DecodeError::MissingField(MODIFIER_KIND_PER_RANK_MULT, "rank"))
        );

        let unknown = ModifierMsg { kind: 42, ..Default::default() };
        assert_eq!(modifier_from_msg(&unknown), Err(DecodeError::ModifierKind(42)));

        let nan = ModifierMsg {
            kind: MODIFIER_KIND_MULTIPLY_MULT,
            factor: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(modifier_from_msg(&nan), Err(DecodeError::Factor(_))));
    }

    #[test]
    fn test_catalog_modifiers_survive_encoding() {
        for joker in JokerCard::catalog() {
            let msg = joker_to_msg(&joker);
            let modifier = msg.modifier.expect("modifier");
            assert_eq!(modifier_from_msg(&modifier), Ok(joker.effect));
        }
    }

    #[test]
    fn test_levels_from_entries() {
        let entries = vec![
            LevelEntry { hand_type: 2, level: 3 },
            LevelEntry { hand_type: 6, level: 0 },
        ];
        let levels = levels_from_entries(&entries).unwrap();
        assert_eq!(levels.get(HandCategory::Pair), 3);
        assert_eq!(levels.get(HandCategory::Flush), 1);
        assert_eq!(levels_to_entries(&levels).len(), HandCategory::ALL.len());

        assert_eq!(
            levels_from_entries(&[LevelEntry { hand_type: 11, level: 2 }]),
            Err(DecodeError::HandType(11))
        );
    }
}
