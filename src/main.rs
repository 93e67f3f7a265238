//! lamco-param-editor - parameter editor demo
//!
//! Shows a definitions file (or the built-in sampler) in the form or tree
//! editor and prints the committed values once the window is closed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lamco_param_editor::config::{definitions, EditorConfig};
use lamco_param_editor::gui;
use lamco_param_editor::sampler;

/// Command-line arguments for lamco-param-editor
#[derive(Parser, Debug)]
#[command(name = "lamco-param-editor")]
#[command(version, about = "Edit typed application parameters", long_about = None)]
pub struct Args {
    /// Parameter definitions file (TOML); the built-in sampler is used when omitted
    pub definitions: Option<PathBuf>,

    /// Show the definitions as a navigable tree
    #[arg(long)]
    pub tree: bool,

    /// Editor configuration file path
    #[arg(short, long, env = "LAMCO_PARAM_EDITOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long, default_value = "pretty")]
    pub log_format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args);

    info!("lamco-param-editor v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&args);
    debug!("Config: {:?}", config);

    if args.tree {
        let hierarchy = match &args.definitions {
            Some(path) => definitions::load_hierarchy(path)?,
            None => sampler::sample_hierarchy(),
        };
        let values = gui::exec_tree(hierarchy, &config).context("Parameter tree failed")?;
        print!("{}", values);
    } else {
        let parameters = match &args.definitions {
            Some(path) => definitions::load_parameter_set(path)?,
            None => sampler::sample_parameters()?,
        };
        let values = gui::exec_editor(parameters, &config).context("Parameter editor failed")?;
        for (key, value) in &values {
            println!("{} = {}", key, value);
        }
    }

    Ok(())
}

/// An explicit config path that fails to load is reported; a missing default
/// config file is not.
fn load_config(args: &Args) -> EditorConfig {
    match &args.config {
        Some(path) => EditorConfig::load_or_default(path),
        None => {
            let path = EditorConfig::default_config_path();
            if path.exists() {
                EditorConfig::load_or_default(path)
            } else {
                EditorConfig::default_config()
            }
        }
    }
}

/// Logs go to stderr; stdout carries the resulting values.
fn init_logging(args: &Args) {
    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // iced and wgpu are chatty below warn
        tracing_subscriber::EnvFilter::new(format!(
            "lamco_param_editor={level},warn",
            level = log_level
        ))
    });

    match args.log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
}
