//! taskgrid init command implementation
//!
//! Writes a default `.taskgrid.toml` in the current directory.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};

/// Options for the init command
pub struct InitOptions {
    pub force: bool,
    pub json: bool,
    pub quiet: bool,
}

#[derive(serde::Serialize)]
struct InitReport {
    config: PathBuf,
    created: bool,
    overwritten: bool,
}

pub fn run(options: InitOptions) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(".taskgrid.toml");

    let existed = config_path.exists();
    if existed && !options.force {
        return Err(Error::ConfigExists(config_path));
    }

    Config::default().save(&config_path)?;

    let report = InitReport {
        config: config_path.clone(),
        created: !existed,
        overwritten: existed,
    };

    let header = if existed {
        "taskgrid init: config overwritten".to_string()
    } else {
        "taskgrid init: config created".to_string()
    };

    let mut human = HumanOutput::new(header);
    human.push_summary("config", config_path.display().to_string());
    human.push_summary("source", Config::default().source);
    human.push_next_step("put your CSV at data.csv (or edit source in .taskgrid.toml)");
    human.push_next_step("taskgrid check");

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "init",
        &report,
        Some(&human),
    )?;

    Ok(())
}
