//! Reusable UI pieces.

pub mod status_bar;
pub mod ticker_card;
