pub mod error;
pub mod messages;
pub mod round_engine;
pub mod tests;

pub use round_engine::RoundEngine;
