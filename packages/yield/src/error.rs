use cosmwasm_std::{CheckedMultiplyFractionError, OverflowError};
use stablevault_utils::error::ValidationError;
use thiserror::Error;

pub type YieldResult<T> = Result<T, YieldError>;

#[derive(Error, Debug, PartialEq)]
pub enum YieldError {
    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    CheckedMultiplyFraction(#[from] CheckedMultiplyFractionError),

    #[error("{0}")]
    Validation(#[from] ValidationError),
}
