pub use self::{assertions::*, contracts::*, mock_env::*, mock_env_builder::*, utils::*};

mod assertions;
mod contracts;
mod mock_env;
mod mock_env_builder;
mod utils;
