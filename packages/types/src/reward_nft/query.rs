use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Empty, StdError};
use cw721_base::QueryMsg as ParentQueryMsg;

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    //--------------------------------------------------------------------------------------------------
    // Extended and overridden messages
    //--------------------------------------------------------------------------------------------------
    /// Sum of the tier boosts of every token the user holds, in basis points
    #[returns(u32)]
    UserBoost {
        user: String,
    },

    /// Number of tokens held by `owner`
    #[returns(u64)]
    BalanceOf {
        owner: String,
    },

    #[returns(Option<super::NftTier>)]
    TokenTier {
        token_id: String,
    },

    /// The next token id that will be minted
    #[returns(String)]
    NextId {},

    #[returns(super::NftConfig)]
    Config {},

    //--------------------------------------------------------------------------------------------------
    // Base cw721 messages
    //--------------------------------------------------------------------------------------------------
    #[returns(cw721_base::Ownership<Addr>)]
    Ownership {},

    /// Return the owner of the given token, error if token does not exist
    #[returns(cw721::OwnerOfResponse)]
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },

    /// Total number of tokens issued
    #[returns(cw721::NumTokensResponse)]
    NumTokens {},

    /// Collection name and symbol
    #[returns(cw721::ContractInfoResponse)]
    ContractInfo {},

    #[returns(cw721::NftInfoResponse<Empty>)]
    NftInfo {
        token_id: String,
    },

    /// Returns all tokens owned by the given address, [] if unset.
    #[returns(cw721::TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Requires pagination. Lists all token_ids controlled by the contract.
    #[returns(cw721::TokensResponse)]
    AllTokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

impl TryFrom<QueryMsg> for ParentQueryMsg<Empty> {
    type Error = StdError;

    fn try_from(msg: QueryMsg) -> Result<Self, Self::Error> {
        match msg {
            QueryMsg::Ownership {} => Ok(ParentQueryMsg::Ownership {}),
            QueryMsg::OwnerOf {
                token_id,
                include_expired,
            } => Ok(ParentQueryMsg::OwnerOf {
                token_id,
                include_expired,
            }),
            QueryMsg::NumTokens {} => Ok(ParentQueryMsg::NumTokens {}),
            QueryMsg::ContractInfo {} => Ok(ParentQueryMsg::ContractInfo {}),
            QueryMsg::NftInfo {
                token_id,
            } => Ok(ParentQueryMsg::NftInfo {
                token_id,
            }),
            QueryMsg::Tokens {
                owner,
                start_after,
                limit,
            } => Ok(ParentQueryMsg::Tokens {
                owner,
                start_after,
                limit,
            }),
            QueryMsg::AllTokens {
                start_after,
                limit,
            } => Ok(ParentQueryMsg::AllTokens {
                start_after,
                limit,
            }),
            _ => Err(StdError::generic_err("msg does not exist on parent")),
        }
    }
}
