//! CLI module for farrier.

mod commands;
pub mod config_cmd;
pub mod inspect;
pub mod output;
pub mod scaffold;

pub use commands::{Commands, ConfigCommands, SkillSourceFilter};
