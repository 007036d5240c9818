mod config;
mod msg;

pub use config::*;
pub use msg::*;
