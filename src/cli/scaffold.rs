//! CLI scaffold command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::cli::output::{ResolvedFormat, output};
use crate::config::FarrierConfig;
use crate::error::{Error, Result};
use crate::scaffold::{self, InstalledState, ScaffoldError, ScaffoldOutcome};
use crate::spec::{PluginSpec, validate};

pub fn run_scaffold(
    spec_path: &Path,
    output_flag: Option<PathBuf>,
    dry_run: bool,
    format: ResolvedFormat,
) -> Result<()> {
    let raw = fs::read_to_string(spec_path)
        .map_err(|e| Error::Spec(format!("cannot read {}: {e}", spec_path.display())))?;
    let spec: PluginSpec =
        serde_json::from_str(&raw).map_err(|e| Error::Spec(e.to_string()))?;
    validate::validate(&spec).map_err(|e| Error::Spec(e.to_string()))?;

    let output_dir = resolve_output_dir(&spec, output_flag)?;
    let write = spec.write_to_disk && !dry_run;
    let state = InstalledState::snapshot();

    match scaffold::scaffold(&spec, &output_dir, write, &state) {
        Ok(ScaffoldOutcome::Written(summary)) => {
            output(&summary, format, |s| {
                println!(
                    "{} {}",
                    "Created plugin at".green().bold(),
                    s.plugin_path.display()
                );
                for file in &s.files {
                    println!("  {file}");
                }
                if !s.next_steps.is_empty() {
                    println!("\n{}", "Next steps:".bold());
                    for step in &s.next_steps {
                        println!("  {step}");
                    }
                }
            });
            Ok(())
        }
        Ok(ScaffoldOutcome::DryRun(report)) => {
            output(&report, format, |r| {
                println!(
                    "{} {} ({} files, nothing written)",
                    "Would create plugin at".bold(),
                    r.plugin_path.display(),
                    r.files.len()
                );
                for file in &r.files {
                    println!("  {} ({} bytes)", file.relative_path, file.content.len());
                }
                println!("\nUse --format json to see file contents.");
            });
            Ok(())
        }
        Err(ScaffoldError::Conflicts(conflicts)) => {
            if format == ResolvedFormat::Json {
                let report = serde_json::json!({
                    "status": "conflict",
                    "conflicts": conflicts,
                });
                println!("{report}");
            } else {
                eprintln!("{}", "Conflicts detected:".red().bold());
                for conflict in &conflicts {
                    eprintln!("  {conflict}");
                }
            }
            Err(Error::Scaffold(ScaffoldError::Conflicts(conflicts)))
        }
        Err(e) => Err(Error::Scaffold(e)),
    }
}

/// Precedence: `--output` flag, then the spec's `outputPath`, then the
/// `output_dir` config setting.
fn resolve_output_dir(spec: &PluginSpec, flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = &spec.output_path {
        return Ok(dir.clone());
    }
    if let Some(dir) = FarrierConfig::load()?.output_dir {
        return Ok(dir);
    }
    Err(Error::NoOutputDir)
}
