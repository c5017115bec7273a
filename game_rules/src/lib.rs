//! # Game Rules
//!
//! The rules layer of Shiji Cards: the four bounded resources, the skill card
//! catalog, and the game state with its activation and turn rules.
//! This crate knows nothing about chapters or scenes; `narrative_core` drives it.

pub mod config;
pub mod error;
pub mod labels;
pub mod resources;
pub mod skills;
pub mod state;

pub use config::*;
pub use error::*;
pub use resources::*;
pub use skills::*;
pub use state::*;
