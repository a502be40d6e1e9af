//! 服務層錯誤

use thiserror::Error;

use crate::game::CardId;

/// 對局操作錯誤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    #[error("card {0} is not in hand")]
    CardNotInHand(CardId),
    #[error("at most {0} cards can be selected")]
    SelectionFull(usize),
    #[error("no cards selected")]
    NothingSelected,
    #[error("no plays left")]
    NoPlaysLeft,
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("joker slots are full ({0})")]
    JokerSlotsFull(usize),
    #[error("no joker in slot {0}")]
    JokerNotFound(usize),
    #[error("the run is already over")]
    RunOver,
}

impl From<RunError> for tonic::Status {
    fn from(err: RunError) -> Self {
        match err {
            RunError::CardNotInHand(_) | RunError::JokerNotFound(_) => {
                tonic::Status::invalid_argument(err.to_string())
            }
            _ => tonic::Status::failed_precondition(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_status_codes() {
        assert_eq!(tonic::Status::from(RunError::CardNotInHand(CardId(3))).code(), Code::InvalidArgument);
        assert_eq!(tonic::Status::from(RunError::JokerNotFound(7)).code(), Code::InvalidArgument);
        assert_eq!(tonic::Status::from(RunError::NoPlaysLeft).code(), Code::FailedPrecondition);
        assert_eq!(tonic::Status::from(RunError::RunOver).code(), Code::FailedPrecondition);
    }
}
