use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Empty, StdError};
use cw721_base::{Action, ExecuteMsg as ParentExecuteMsg};
use cw_utils::Expiration;

use super::NftConfigUpdates;

#[cw_serde]
pub enum ExecuteMsg {
    //--------------------------------------------------------------------------------------------------
    // Extended and overridden messages
    //--------------------------------------------------------------------------------------------------
    /// Mint a Genesis tier token (minter only)
    MintGenesis {
        recipient: String,
    },

    /// Mint a Multiplier tier token (minter only)
    MintMultiplier {
        recipient: String,
    },

    /// Mint an Access tier token (minter only)
    MintAccess {
        recipient: String,
    },

    /// Mint a token without tier. It grants no boost.
    Mint {
        recipient: String,
        token_uri: Option<String>,
    },

    /// Burn a token the sender owns or is approved for. Its tier is forgotten.
    Burn {
        token_id: String,
    },

    UpdateConfig {
        updates: NftConfigUpdates,
    },

    //--------------------------------------------------------------------------------------------------
    // Base cw721 messages
    //--------------------------------------------------------------------------------------------------
    /// Transfer is a base message to move a token to another account without triggering actions
    TransferNft {
        recipient: String,
        token_id: String,
    },

    /// Send is a base message to transfer a token to a contract and trigger an action
    /// on the receiving contract.
    SendNft {
        contract: String,
        token_id: String,
        msg: Binary,
    },

    /// Allows operator to transfer / send the token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    Approve {
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    },

    /// Remove previously granted Approval
    Revoke {
        spender: String,
        token_id: String,
    },

    /// Allows operator to transfer / send any token from the owner's account.
    /// If expiration is set, then this allowance has a time/height limit
    ApproveAll {
        operator: String,
        expires: Option<Expiration>,
    },

    /// Remove previously granted ApproveAll permission
    RevokeAll {
        operator: String,
    },

    /// Propose, accept or renounce the minter role
    UpdateOwnership(Action),
}

impl TryFrom<ExecuteMsg> for ParentExecuteMsg<Empty, Empty> {
    type Error = StdError;

    fn try_from(msg: ExecuteMsg) -> Result<Self, Self::Error> {
        match msg {
            ExecuteMsg::TransferNft {
                recipient,
                token_id,
            } => Ok(ParentExecuteMsg::TransferNft {
                recipient,
                token_id,
            }),
            ExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            } => Ok(ParentExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            }),
            ExecuteMsg::Approve {
                spender,
                token_id,
                expires,
            } => Ok(ParentExecuteMsg::Approve {
                spender,
                token_id,
                expires,
            }),
            ExecuteMsg::Revoke {
                spender,
                token_id,
            } => Ok(ParentExecuteMsg::Revoke {
                spender,
                token_id,
            }),
            ExecuteMsg::ApproveAll {
                operator,
                expires,
            } => Ok(ParentExecuteMsg::ApproveAll {
                operator,
                expires,
            }),
            ExecuteMsg::RevokeAll {
                operator,
            } => Ok(ParentExecuteMsg::RevokeAll {
                operator,
            }),
            ExecuteMsg::UpdateOwnership(action) => Ok(ParentExecuteMsg::UpdateOwnership(action)),
            _ => Err(StdError::generic_err("msg does not exist on parent")),
        }
    }
}
