//! Game driver and match runner for Isolation engines
//!
//! This crate provides infrastructure for:
//! - Playing single games with per-move time limits and forfeit rules
//! - Running matches between engines and tallying the results
//! - Saving match reports as JSON
//!
//! # Usage
//!
//! ```bash
//! # Watch alpha-beta play a random mover
//! cargo run -p tournament -- play alphabeta random
//!
//! # Run a match between two search depths
//! cargo run -p tournament -- match alphabeta:3 alphabeta:5 --games 20
//! ```

mod engines;
mod error;
mod human;
mod match_runner;
mod results;

pub use engines::*;
pub use error::*;
pub use human::*;
pub use match_runner::*;
pub use results::*;
