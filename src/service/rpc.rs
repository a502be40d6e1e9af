//! JokerScore gRPC 服務

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use tonic::{Request, Response, Status};

use super::convert::{card_from_msg, hand_type_from_int, levels_from_entries, modifier_from_msg, play_to_msg};
use super::observation::snapshot_from_state;
use super::state::RunState;
use crate::game::{
    classify, compose, Card, CardId, JokerCard, ModifierEffect, ACTION_TYPE_ADD_JOKER,
    ACTION_TYPE_COUNT, ACTION_TYPE_DISCARD, ACTION_TYPE_END_RUN, ACTION_TYPE_LEVEL_UP,
    ACTION_TYPE_PLAY, ACTION_TYPE_SELECT, ACTION_TYPE_SELL_JOKER,
};
use crate::proto::joker_score_server::JokerScore;
use crate::proto::{
    EvaluateRequest, EvaluateResponse, NewRunRequest, NewRunResponse, StepRequest, StepResponse,
};

/// 持有所有進行中的對局；盲注結束（達成或失敗）的對局在回傳最後快照後移除
pub struct ScoreService {
    runs: DashMap<u64, RunState>,
    next_id: AtomicU64,
}

impl Default for ScoreService {
    fn default() -> Self {
        Self {
            runs: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }
}

impl ScoreService {
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }
}

fn index_param(param: i64, what: &str) -> Result<usize, Status> {
    usize::try_from(param).map_err(|_| Status::invalid_argument(format!("invalid {what} {param}")))
}

/// 對單一對局執行一個動作；回傳本次出牌的計分（若有）
fn apply_action(
    state: &mut RunState,
    action_type: i32,
    param: i64,
) -> Result<Option<EvaluateResponse>, Status> {
    let mut play = None;

    match action_type {
        ACTION_TYPE_SELECT => {
            let id = u32::try_from(param)
                .map_err(|_| Status::invalid_argument(format!("invalid card id {param}")))?;
            state.toggle_selection(CardId(id))?;
        }

        ACTION_TYPE_PLAY => {
            let score = state.play_selected()?;
            play = Some(play_to_msg(&score));
        }

        ACTION_TYPE_DISCARD => {
            state.discard_selected()?;
        }

        ACTION_TYPE_LEVEL_UP => {
            let category = i32::try_from(param)
                .ok()
                .and_then(|v| hand_type_from_int(v).ok())
                .ok_or_else(|| Status::invalid_argument(format!("invalid hand type {param}")))?;
            state.level_up(category);
        }

        ACTION_TYPE_ADD_JOKER => {
            let index = index_param(param, "catalog index")?;
            let joker = JokerCard::catalog()
                .into_iter()
                .nth(index)
                .ok_or_else(|| Status::invalid_argument(format!("no catalog joker {index}")))?;
            state.add_joker(joker)?;
        }

        ACTION_TYPE_SELL_JOKER => {
            let index = index_param(param, "joker slot")?;
            state.remove_joker(index)?;
        }

        other => {
            return Err(Status::invalid_argument(format!(
                "unknown action type {other} (expected 0..{ACTION_TYPE_COUNT})"
            )));
        }
    }

    state.episode_step += 1;
    Ok(play)
}

#[tonic::async_trait]
impl JokerScore for ScoreService {
    async fn evaluate(
        &self,
        request: Request<EvaluateRequest>,
    ) -> Result<Response<EvaluateResponse>, Status> {
        let EvaluateRequest { cards, levels, modifiers } = request.into_inner();

        let cards = cards.iter().map(card_from_msg).collect::<Result<Vec<Card>, _>>()?;
        let levels = levels_from_entries(&levels)?;
        let modifiers = modifiers
            .iter()
            .map(modifier_from_msg)
            .collect::<Result<Vec<ModifierEffect>, _>>()?;

        let category = classify(&cards);
        let result = compose(category, &cards, &levels, &modifiers);

        Ok(Response::new(EvaluateResponse {
            hand_type: category.to_int(),
            chips: result.chips,
            mult: result.multiplier,
            total: result.total_score(),
        }))
    }

    async fn new_run(
        &self,
        request: Request<NewRunRequest>,
    ) -> Result<Response<NewRunResponse>, Status> {
        let seed = request.into_inner().seed;
        let run_id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let state = RunState::new(seed);
        let snapshot = snapshot_from_state(&state);
        self.runs.insert(run_id, state);

        tracing::info!(run_id, seed, "run created");

        Ok(Response::new(NewRunResponse {
            run_id,
            snapshot: Some(snapshot),
        }))
    }

    async fn step(&self, request: Request<StepRequest>) -> Result<Response<StepResponse>, Status> {
        let StepRequest { run_id, action_type, param } = request.into_inner();

        if action_type == ACTION_TYPE_END_RUN {
            let (_, state) = self
                .runs
                .remove(&run_id)
                .ok_or_else(|| Status::not_found(format!("no run {run_id}")))?;
            tracing::info!(run_id, score = state.score, "run ended");
            return Ok(Response::new(StepResponse {
                snapshot: Some(snapshot_from_state(&state)),
                play: None,
                done: true,
            }));
        }

        let response = {
            let mut state = self
                .runs
                .get_mut(&run_id)
                .ok_or_else(|| Status::not_found(format!("no run {run_id}")))?;

            let play = apply_action(&mut state, action_type, param).map_err(|err| {
                tracing::debug!(run_id, action_type, param, error = %err.message(), "action rejected");
                err
            })?;

            let status = state.status();
            if status.is_over() {
                tracing::info!(run_id, score = state.score, status = ?status, "blind finished");
            }

            StepResponse {
                snapshot: Some(snapshot_from_state(&state)),
                play,
                done: status.is_over(),
            }
        };

        // 先釋放 get_mut 的鎖再移除
        if response.done {
            self.runs.remove(&run_id);
        }

        Ok(Response::new(response))
    }
}
