//! Filesystem layout of a Claude Code installation.
//!
//! All lookups go through [`claude_dir`], which respects the
//! `FARRIER_CLAUDE_DIR` environment variable (for testing) and the
//! `claude_dir` config setting before falling back to `~/.claude`.

use std::path::PathBuf;

use crate::config::FarrierConfig;

/// Root of the Claude Code installation (normally `~/.claude`).
pub fn claude_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("FARRIER_CLAUDE_DIR") {
        return Some(PathBuf::from(dir));
    }

    if let Ok(config) = FarrierConfig::load() {
        if let Some(dir) = config.claude_dir {
            return Some(dir);
        }
    }

    dirs::home_dir().map(|home| home.join(".claude"))
}

/// Directory holding installed plugins and the installation registry.
pub fn plugins_dir() -> Option<PathBuf> {
    claude_dir().map(|d| d.join("plugins"))
}

/// The installed-plugins registry file.
pub fn plugins_registry_path() -> Option<PathBuf> {
    plugins_dir().map(|d| d.join("installed_plugins.json"))
}

/// Directory holding user-created skills (as opposed to plugin-owned ones).
pub fn user_skills_dir() -> Option<PathBuf> {
    claude_dir().map(|d| d.join("skills"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claude_dir_respects_env_override() {
        // Env vars are process-global; keep this the only test touching it.
        unsafe { std::env::set_var("FARRIER_CLAUDE_DIR", "/tmp/fake-claude") };
        assert_eq!(claude_dir(), Some(PathBuf::from("/tmp/fake-claude")));
        assert_eq!(
            plugins_registry_path(),
            Some(PathBuf::from("/tmp/fake-claude/plugins/installed_plugins.json"))
        );
        assert_eq!(
            user_skills_dir(),
            Some(PathBuf::from("/tmp/fake-claude/skills"))
        );
        unsafe { std::env::remove_var("FARRIER_CLAUDE_DIR") };
    }
}
