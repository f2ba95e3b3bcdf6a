//! CLI read commands over installed-plugin state.

use colored::Colorize;
use serde::Serialize;

use crate::cli::SkillSourceFilter;
use crate::cli::output::{ResolvedFormat, output, output_list};
use crate::error::{Error, Result};
use crate::registry::{self, McpServerConfig, SkillInfo, SkillSource};

pub fn list_plugins(format: ResolvedFormat) {
    let plugins = registry::plugins::read_installed_plugins();

    output_list(&plugins, format, |plugins| {
        if plugins.is_empty() {
            println!("No plugins installed.");
            return;
        }
        println!("{}", "Installed plugins:".bold());
        for plugin in plugins {
            let mut capabilities = Vec::new();
            if plugin.has_mcp_config {
                capabilities.push("mcp");
            }
            if plugin.has_skills {
                capabilities.push("skills");
            }
            let suffix = if capabilities.is_empty() {
                String::new()
            } else {
                format!(" [{}]", capabilities.join(", "))
            };
            let scope = if plugin.scope.is_empty() {
                String::new()
            } else {
                format!(" ({})", plugin.scope)
            };
            println!(
                "  {} {}{}{}",
                plugin.name.green(),
                plugin.version.dimmed(),
                scope,
                suffix
            );
            if !plugin.description.is_empty() {
                println!("    {}", plugin.description);
            }
            println!("    {}", plugin.install_path.display().to_string().dimmed());
        }
    });
}

pub fn list_mcp_servers(format: ResolvedFormat) {
    let plugins = registry::plugins::read_installed_plugins();
    let servers = registry::mcp::read_mcp_servers(&plugins);

    output_list(&servers, format, |servers| {
        if servers.is_empty() {
            println!("No MCP servers configured by installed plugins.");
            return;
        }
        println!("{}", "MCP servers:".bold());
        for server in servers {
            println!(
                "  {} ({}) from {}",
                server.server_name.green(),
                server.transport(),
                server.source_plugin_name
            );
        }
    });
}

pub fn show_mcp_server(name: &str, format: ResolvedFormat) -> Result<()> {
    let plugins = registry::plugins::read_installed_plugins();
    let servers = registry::mcp::read_mcp_servers(&plugins);

    let server = servers
        .into_iter()
        .find(|s| s.server_name == name)
        .ok_or_else(|| Error::ServerNotFound(name.to_string()))?;

    output(&server, format, print_server_details);
    Ok(())
}

fn print_server_details(server: &McpServerConfig) {
    println!("{}", server.server_name.green().bold());
    println!("  Plugin: {}", server.source_plugin_name);
    println!("  Transport: {}", server.transport());
    if let Some(command) = &server.command {
        if server.args.is_empty() {
            println!("  Command: {command}");
        } else {
            println!("  Command: {command} {}", server.args.join(" "));
        }
    }
    if let Some(url) = &server.url {
        println!("  URL: {url}");
    }
    if let Some(cwd) = &server.cwd {
        println!("  Working directory: {cwd}");
    }
    if !server.env.is_empty() {
        let mut keys: Vec<&String> = server.env.keys().collect();
        keys.sort();
        println!("  Env:");
        for key in keys {
            println!("    {key}");
        }
    }
}

pub fn list_skills(filter: SkillSourceFilter, format: ResolvedFormat) {
    let skills = filtered_skills(filter);

    output_list(&skills, format, |skills| {
        if skills.is_empty() {
            println!("No skills found.");
            return;
        }
        println!("{}", "Skills:".bold());
        print_skill_lines(skills);
    });
}

pub fn show_skill(name: &str, filter: SkillSourceFilter, format: ResolvedFormat) -> Result<()> {
    let skill = filtered_skills(filter)
        .into_iter()
        .find(|s| s.name == name || s.directory_name == name)
        .ok_or_else(|| Error::SkillNotFound(name.to_string()))?;

    let content = registry::skills::skill_content(&skill.file_path)
        .map_err(|_| Error::SkillNotFound(name.to_string()))?;

    let detail = SkillDetail { skill, content };
    output(&detail, format, |d| {
        print!("{}", d.content);
        if !d.content.ends_with('\n') {
            println!();
        }
    });
    Ok(())
}

pub fn search_skills(query: &str, filter: SkillSourceFilter, format: ResolvedFormat) {
    let needle = query.to_lowercase();
    let matches: Vec<SearchMatch> = filtered_skills(filter)
        .into_iter()
        .filter_map(|skill| {
            let mut matched_in = Vec::new();
            if skill.name.to_lowercase().contains(&needle) {
                matched_in.push("name");
            }
            if skill.description.to_lowercase().contains(&needle) {
                matched_in.push("description");
            }
            // Unreadable skill files just don't match on content.
            let content =
                registry::skills::skill_content(&skill.file_path).unwrap_or_default();
            if content.to_lowercase().contains(&needle) {
                matched_in.push("content");
            }
            if matched_in.is_empty() {
                None
            } else {
                Some(SearchMatch { skill, matched_in })
            }
        })
        .collect();

    output_list(&matches, format, |matches| {
        if matches.is_empty() {
            println!("No skills matching \"{query}\".");
            return;
        }
        println!("{}", format!("Skills matching \"{query}\":").bold());
        for m in matches {
            println!(
                "  {} ({}) matched in {}",
                m.skill.name.green(),
                skill_origin(&m.skill).dimmed(),
                m.matched_in.join(", ")
            );
            if !m.skill.description.is_empty() {
                println!("    {}", m.skill.description);
            }
        }
    });
}

/// One search hit plus the fields the query was found in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchMatch {
    #[serde(flatten)]
    skill: SkillInfo,
    matched_in: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SkillDetail {
    #[serde(flatten)]
    skill: SkillInfo,
    content: String,
}

fn filtered_skills(filter: SkillSourceFilter) -> Vec<SkillInfo> {
    let plugins = registry::plugins::read_installed_plugins();
    registry::skills::read_all_skills(&plugins)
        .into_iter()
        .filter(|s| filter.matches(s.source))
        .collect()
}

fn skill_origin(skill: &SkillInfo) -> String {
    match skill.source {
        SkillSource::Plugin => skill
            .source_plugin_name
            .clone()
            .unwrap_or_else(|| "plugin".to_string()),
        SkillSource::User => "user".to_string(),
    }
}

fn print_skill_lines(skills: &[SkillInfo]) {
    for skill in skills {
        println!("  {} ({})", skill.name.green(), skill_origin(skill).dimmed());
        if !skill.description.is_empty() {
            println!("    {}", skill.description);
        }
    }
}
