//! Wire models for the ticker REST endpoint.

pub mod ticker;

pub use ticker::{TickerPayload, TickerRecord};
