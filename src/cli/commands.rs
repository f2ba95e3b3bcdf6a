//! CLI subcommand definitions.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use super::output::OutputFormat;
use crate::registry::SkillSource;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a plugin from a JSON spec file.
    Scaffold {
        /// Path to the plugin spec JSON file.
        spec: PathBuf,

        /// Output directory (overrides the spec's outputPath).
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Generate without writing anything; report the files instead.
        #[arg(long)]
        dry_run: bool,

        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// List installed plugins.
    Plugins {
        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// List MCP servers configured by installed plugins.
    Mcps {
        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Show details of one MCP server.
    Mcp {
        /// Server name.
        name: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// List available skills.
    Skills {
        /// Restrict to plugin-owned or user-owned skills.
        #[arg(long, value_enum, default_value_t)]
        source: SkillSourceFilter,

        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Show a skill's full content.
    Skill {
        /// Skill name.
        name: String,

        /// Restrict to plugin-owned or user-owned skills.
        #[arg(long, value_enum, default_value_t)]
        source: SkillSourceFilter,

        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Search skills by name, description, or content.
    Search {
        /// Case-insensitive substring to look for.
        query: String,

        /// Restrict to plugin-owned or user-owned skills.
        #[arg(long, value_enum, default_value_t)]
        source: SkillSourceFilter,

        /// Output format.
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Manage farrier settings.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set a configuration value.
    Set {
        /// Setting name (claude_dir or output_dir).
        key: String,
        /// Value to set.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Setting name.
        key: String,
    },
}

/// Skill listing filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SkillSourceFilter {
    #[default]
    All,
    Plugin,
    User,
}

impl SkillSourceFilter {
    pub fn matches(self, source: SkillSource) -> bool {
        match self {
            Self::All => true,
            Self::Plugin => source == SkillSource::Plugin,
            Self::User => source == SkillSource::User,
        }
    }
}
