pub mod apy;
pub mod error;
pub use self::apy::*;

#[cfg(feature = "javascript")]
mod javascript;
#[cfg(feature = "javascript")]
pub use self::javascript::*;
