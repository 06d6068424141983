//! shelltrix demo entry point.
//!
//! Registers a few sample commands and runs an interactive shell on the
//! terminal. Tab completes commands; after `honk ` it completes `foo`/`bar`.
//! `help`, `help <command>`, `exit`/`quit`, Ctrl-D, and Ctrl-C all work.
//!
//! Configuration is read from the TOML file named by the first argument or
//! the `SHELLTRIX_CONFIG` environment variable; defaults otherwise.

mod demo;

use anyhow::{Context, Result};

use shelltrix_core::{CommandRegistry, RustylineEditor, Shell, ShellConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config()?;

    // Set up commands before the loop starts; the shell takes the registry.
    let mut registry = CommandRegistry::new();
    for notice in demo::register_demo_commands(&mut registry) {
        println!("note: {notice}");
    }
    log::info!("Registered {} commands", registry.len());

    let shell = Shell::new(registry, config);
    let mut editor = RustylineEditor::new(shell.config())?;
    let status = shell.run(&mut editor, &mut std::io::stdout().lock())?;
    log::info!("Exiting with status {}", status.code());
    std::process::exit(status.code());
}

/// Resolve config from CLI arg, `SHELLTRIX_CONFIG`, or defaults.
fn load_config() -> Result<ShellConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SHELLTRIX_CONFIG").ok());
    match path {
        Some(path) => {
            let config = ShellConfig::load(&path)
                .with_context(|| format!("loading shell config from {path}"))?;
            log::info!("Loaded config from {path}");
            Ok(config)
        },
        None => Ok(ShellConfig {
            prompt: "goose> ".to_string(),
            banner: Some("shelltrix demo. Type 'help' to list commands.".to_string()),
            ..ShellConfig::default()
        }),
    }
}
