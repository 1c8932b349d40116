//! Application state and logic

mod export;
mod handlers;
mod state;

pub use state::*;
