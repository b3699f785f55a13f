//! Command execution handlers
//!
//! Every handler follows the same shape: load the manifest into a
//! declaration set, run resolution over it, render the result. The
//! declaration set is rebuilt from disk on every invocation.

use crate::application::config::AppConfig;
use crate::application::{CliConfig, Commands};
use crate::graph::{DeclarationSet, Manifest, ModuleGraph, ScopeResolver};
use crate::primitives::ColorMode;
use anyhow::{Context, Result, anyhow, bail};
use console::style;
use tracing::debug;

/// Execute CLI commands
pub fn execute_command(config: CliConfig) -> Result<()> {
    apply_color_mode(config.app_config.color);

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            println!("modgraph - module dependency graph resolution");
            println!("Run 'modgraph --help' for usage information");
            return Ok(());
        }
    };

    execute(&config.app_config, command)
}

/// Execute a specific command with a provided configuration (for testing)
pub fn execute(config: &AppConfig, command: Commands) -> Result<()> {
    match command {
        Commands::Version => handle_version(),
        Commands::Modules { json } => handle_modules(config, json),
        Commands::Order { json } => handle_order(config, json),
        Commands::Resolve { module, test, json } => handle_resolve(config, &module, test, json),
        Commands::Check => handle_check(config),
    }
}

fn apply_color_mode(color: ColorMode) {
    match color {
        ColorMode::Always => {
            console::set_colors_enabled(true);
            console::set_colors_enabled_stderr(true);
        }
        ColorMode::Never => {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        ColorMode::Auto => {}
    }
}

fn load_declarations(config: &AppConfig) -> Result<DeclarationSet> {
    let path = config.manifest_path()?;
    debug!("Using module manifest: {}", path.display());

    Manifest::load(&path)
        .with_context(|| format!("failed to load module manifest '{}'", path.display()))
}

fn handle_version() -> Result<()> {
    println!("modgraph {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

fn handle_modules(config: &AppConfig, json: bool) -> Result<()> {
    let declarations = load_declarations(config)?;

    if json {
        #[derive(serde::Serialize)]
        struct ModuleListing<'a> {
            name: &'a str,
            description: Option<&'a str>,
            published: bool,
            dependencies: usize,
        }

        let listing: Vec<ModuleListing<'_>> = declarations
            .modules()
            .map(|m| ModuleListing {
                name: &m.name,
                description: m.description.as_deref(),
                published: m.published,
                dependencies: m.dependencies.len(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for module in declarations.modules() {
        let marker = if module.published {
            format!(" {}", style("[published]").green())
        } else {
            String::new()
        };
        let description = module
            .description
            .as_deref()
            .map(|d| format!(" - {d}"))
            .unwrap_or_default();

        println!("{}{}{}", style(&module.name).cyan().bold(), marker, description);
    }

    Ok(())
}

fn handle_order(config: &AppConfig, json: bool) -> Result<()> {
    let declarations = load_declarations(config)?;
    let resolver = ScopeResolver::new(&declarations);
    let graph = ModuleGraph::build(&declarations, &resolver)?;
    let order = graph.topological_sort()?;

    if json {
        let names: Vec<&str> = order.iter().map(|n| n.name.as_str()).collect();
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    for (position, node) in order.iter().enumerate() {
        println!("{:>4}. {}", position + 1, style(&node.name).cyan());
    }

    Ok(())
}

fn handle_resolve(config: &AppConfig, module: &str, test: bool, json: bool) -> Result<()> {
    let declarations = load_declarations(config)?;
    let resolver = ScopeResolver::new(&declarations);

    let effective = resolver
        .resolve(module)
        .ok_or_else(|| anyhow!("unknown module '{module}'"))?;
    let view = if test { &effective.test } else { &effective.main };

    if json {
        let entries: Vec<_> = view.values().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if view.is_empty() {
        println!("{} has no dependencies", style(module).cyan().bold());
        return Ok(());
    }

    println!(
        "{} ({} {})",
        style(module).cyan().bold(),
        view.len(),
        if test { "test dependencies" } else { "dependencies" }
    );
    for entry in view.values() {
        let mut notes = Vec::new();
        if !entry.direct {
            notes.push("inherited".to_string());
        }
        if entry.fixtures {
            notes.push("fixtures".to_string());
        }
        if let Some(reason) = &entry.because {
            notes.push(format!("because: {reason}"));
        }

        let suffix = if notes.is_empty() {
            String::new()
        } else {
            format!(" ({})", notes.join(", "))
        };

        println!(
            "  {} {}{}",
            style(&entry.module).cyan(),
            style(entry.scope).dim(),
            suffix
        );
    }

    Ok(())
}

fn handle_check(config: &AppConfig) -> Result<()> {
    let declarations = load_declarations(config)?;
    let resolver = ScopeResolver::new(&declarations);
    let graph = ModuleGraph::build(&declarations, &resolver)?;

    let mut problems = 0usize;

    if let Some(cycle) = graph.detect_cycle() {
        println!(
            "{} cyclic dependency: {}",
            style("error:").red().bold(),
            cycle.join(" -> ")
        );
        problems += 1;
    }

    for leak in resolver.check_publication() {
        println!("{} {}", style("warning:").yellow().bold(), leak);
        problems += 1;
    }

    if problems > 0 {
        bail!(
            "{problems} problem(s) found across {} module(s)",
            declarations.len()
        );
    }

    println!(
        "{} {} module(s) validated",
        style("ok:").green().bold(),
        declarations.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    include!("commands.test.rs");
}
