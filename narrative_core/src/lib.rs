//! # Narrative Core
//!
//! The story layer of Shiji Cards. It loads and validates the chapter/scene
//! script and runs it against the rules in `game_rules`.
//!
//! ## Core Components
//!
//! - **script**: Chapters, scenes and choices as plain data, with load-time validation
//! - **controller**: The scene state machine that interprets choice effects
//! - **error**: Script errors and rejected story actions
//!
//! ## Design Philosophy
//!
//! - **Data-Driven**: Choice effects are tagged variants, never code embedded in content
//! - **Validated Up Front**: A broken script is a configuration error, not a mid-game crash
//! - **Explicit State**: The controller owns the run; nothing is global

pub mod controller;
pub mod error;
pub mod script;

pub use controller::*;
pub use error::*;
pub use script::*;
