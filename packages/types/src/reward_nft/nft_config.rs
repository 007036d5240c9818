use cosmwasm_schema::cw_serde;

#[cw_serde]
#[derive(Default)]
pub struct NftConfig {
    pub base_token_uri: Option<String>,
}

impl NftConfig {
    pub fn token_uri(&self, token_id: &str) -> Option<String> {
        self.base_token_uri
            .as_ref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), token_id))
    }
}

#[cw_serde]
#[derive(Default)]
pub struct NftConfigUpdates {
    pub base_token_uri: Option<String>,
}
