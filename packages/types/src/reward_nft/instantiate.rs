use cosmwasm_schema::cw_serde;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Only address allowed to mint. Managed as the collection ownership afterwards.
    pub minter: String,
    /// Tier mints get `{base_token_uri}/{token_id}` as their token URI
    pub base_token_uri: Option<String>,
}
