//! gRPC 訊息定義
//!
//! 整數編碼：
//! - rank: 排序值 2..=14（A = 14），萬用牌 = 15
//! - suit: 0 = Spades, 1 = Hearts, 2 = Diamonds, 3 = Clubs；萬用牌不帶 suit
//! - hand_type: 1 = High Card ... 10 = Five of a Kind
//! - modifier kind: 見 `MODIFIER_KIND_*`

pub const MODIFIER_KIND_FLAT_CHIPS: i32 = 0;
pub const MODIFIER_KIND_FLAT_MULT: i32 = 1;
pub const MODIFIER_KIND_MULTIPLY_MULT: i32 = 2;
pub const MODIFIER_KIND_PER_SUIT_MULT: i32 = 3;
pub const MODIFIER_KIND_PER_HAND_TYPE_MULT: i32 = 4;
pub const MODIFIER_KIND_PER_RANK_MULT: i32 = 5;
pub const MODIFIER_KIND_FIRST_PLAYED_CHIPS: i32 = 6;

#[derive(Clone, PartialEq, prost::Message)]
pub struct CardMsg {
    #[prost(uint32, tag = "1")]
    pub id: u32,
    #[prost(int32, tag = "2")]
    pub rank: i32,
    #[prost(int32, optional, tag = "3")]
    pub suit: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ModifierMsg {
    #[prost(int32, tag = "1")]
    pub kind: i32,
    /// FlatChips / FlatMult / PerHandTypeMult / FirstPlayedChips 的數值，
    /// 或 PerSuitMult / PerRankMult 的每張加成
    #[prost(int64, tag = "2")]
    pub amount: i64,
    /// MultiplyMult 的倍數
    #[prost(double, tag = "3")]
    pub factor: f64,
    #[prost(int32, optional, tag = "4")]
    pub suit: Option<i32>,
    #[prost(int32, optional, tag = "5")]
    pub rank: Option<i32>,
    #[prost(int32, optional, tag = "6")]
    pub hand_type: Option<i32>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct LevelEntry {
    #[prost(int32, tag = "1")]
    pub hand_type: i32,
    #[prost(uint32, tag = "2")]
    pub level: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct JokerMsg {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub description: String,
    #[prost(int64, tag = "3")]
    pub price: i64,
    #[prost(message, optional, tag = "4")]
    pub modifier: Option<ModifierMsg>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EvaluateRequest {
    #[prost(message, repeated, tag = "1")]
    pub cards: Vec<CardMsg>,
    /// 未列出的牌型視為 Level 1
    #[prost(message, repeated, tag = "2")]
    pub levels: Vec<LevelEntry>,
    #[prost(message, repeated, tag = "3")]
    pub modifiers: Vec<ModifierMsg>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct EvaluateResponse {
    #[prost(int32, tag = "1")]
    pub hand_type: i32,
    #[prost(int64, tag = "2")]
    pub chips: i64,
    #[prost(int64, tag = "3")]
    pub mult: i64,
    #[prost(int64, tag = "4")]
    pub total: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RunSnapshot {
    #[prost(message, repeated, tag = "1")]
    pub hand: Vec<CardMsg>,
    #[prost(uint32, repeated, tag = "2")]
    pub selected: Vec<u32>,
    #[prost(message, repeated, tag = "3")]
    pub jokers: Vec<JokerMsg>,
    #[prost(message, repeated, tag = "4")]
    pub hand_levels: Vec<LevelEntry>,
    #[prost(int64, tag = "5")]
    pub score: i64,
    #[prost(int64, tag = "6")]
    pub blind_target: i64,
    #[prost(int32, tag = "7")]
    pub plays_left: i32,
    #[prost(int32, tag = "8")]
    pub discards_left: i32,
    #[prost(uint32, tag = "9")]
    pub deck_remaining: u32,
    /// 0 = 進行中, 1 = 達成, 2 = 失敗
    #[prost(int32, tag = "10")]
    pub status: i32,
    #[prost(int32, tag = "11")]
    pub episode_step: i32,
    /// 目前選牌的預覽
    #[prost(message, optional, tag = "12")]
    pub preview: Option<EvaluateResponse>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NewRunRequest {
    #[prost(uint64, tag = "1")]
    pub seed: u64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NewRunResponse {
    #[prost(uint64, tag = "1")]
    pub run_id: u64,
    #[prost(message, optional, tag = "2")]
    pub snapshot: Option<RunSnapshot>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StepRequest {
    #[prost(uint64, tag = "1")]
    pub run_id: u64,
    #[prost(int32, tag = "2")]
    pub action_type: i32,
    /// SELECT: card id；LEVEL_UP: hand_type；ADD_JOKER: 目錄索引；SELL_JOKER: 欄位索引
    #[prost(int64, tag = "3")]
    pub param: i64,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct StepResponse {
    #[prost(message, optional, tag = "1")]
    pub snapshot: Option<RunSnapshot>,
    /// 本次動作為 PLAY 時的計分結果
    #[prost(message, optional, tag = "2")]
    pub play: Option<EvaluateResponse>,
    #[prost(bool, tag = "3")]
    pub done: bool,
}

include!(concat!(env!("OUT_DIR"), "/joker_score.JokerScore.rs"));
