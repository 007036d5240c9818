use cosmwasm_std::{OverflowError, StdError, Uint128};
use cw_utils::PaymentError;
use mars_owner::OwnerError;
use stablevault_utils::error::ValidationError;
use stablevault_yield::error::YieldError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error(transparent)]
    Owner(#[from] OwnerError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Yield(#[from] YieldError),

    #[error("{reason:?}")]
    InvalidAmount {
        reason: String,
    },

    #[error("Insufficient vault balance: available {available}, requested {requested}")]
    InsufficientBalance {
        available: Uint128,
        requested: Uint128,
    },
}

pub type ContractResult<T> = Result<T, ContractError>;
