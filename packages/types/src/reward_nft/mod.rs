mod execute;
mod instantiate;
mod nft_config;
mod query;
mod tier;

pub use execute::*;
pub use instantiate::*;
pub use nft_config::*;
pub use query::*;
pub use tier::*;
