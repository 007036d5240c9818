use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    BaseError(#[from] cw721_base::ContractError),

    #[error(transparent)]
    Std(#[from] StdError),
}
