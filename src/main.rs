mod cli;
mod config;
mod error;
mod paths;
mod registry;
mod scaffold;
mod spec;

use clap::Parser;
use cli::{Commands, ConfigCommands};

#[derive(Parser)]
#[command(name = "farrier")]
#[command(version, about = "Claude Code plugin scaffolding and inspection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Scaffold {
            spec,
            output,
            dry_run,
            format,
        } => cli::scaffold::run_scaffold(&spec, output, dry_run, format.resolve())?,
        Commands::Plugins { format } => cli::inspect::list_plugins(format.resolve()),
        Commands::Mcps { format } => cli::inspect::list_mcp_servers(format.resolve()),
        Commands::Mcp { name, format } => cli::inspect::show_mcp_server(&name, format.resolve())?,
        Commands::Skills { source, format } => cli::inspect::list_skills(source, format.resolve()),
        Commands::Skill {
            name,
            source,
            format,
        } => cli::inspect::show_skill(&name, source, format.resolve())?,
        Commands::Search {
            query,
            source,
            format,
        } => cli::inspect::search_skills(&query, source, format.resolve()),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Set { key, value } => cli::config_cmd::set_config(&key, &value)?,
            ConfigCommands::Get { key } => cli::config_cmd::get_config(&key)?,
        },
    }

    Ok(())
}
