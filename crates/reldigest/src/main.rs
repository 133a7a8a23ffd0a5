// SPDX-FileCopyrightText: 2026 Reldigest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reldigest - deferred Slack release-note summarization service.
//!
//! This is the binary entry point for the reldigest gateway.

use clap::{Parser, Subcommand};

use reldigest::serve;

/// Reldigest - deferred Slack release-note summarization service.
#[derive(Parser, Debug)]
#[command(name = "reldigest", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the reldigest gateway server.
    Serve,
    /// Print the resolved configuration (secrets redacted).
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match reldigest_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            reldigest_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Serve) => {
            if let Err(err) = serve::run_serve(config).await {
                eprintln!("reldigest serve: {err}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config) => {
            print_config(config);
        }
        None => {
            println!("reldigest: use --help for available commands");
        }
    }
}

/// Prints the resolved configuration as TOML with secrets redacted.
fn print_config(mut config: reldigest_config::DigestConfig) {
    let redact = |v: &mut Option<String>| {
        if v.is_some() {
            *v = Some("[redacted]".to_string());
        }
    };
    redact(&mut config.slack.bot_token);
    redact(&mut config.anthropic.api_key);
    redact(&mut config.gateway.bearer_token);

    match toml::to_string_pretty(&config) {
        Ok(rendered) => print!("{rendered}"),
        Err(err) => eprintln!("reldigest config: failed to render: {err}"),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn binary_loads_config_defaults() {
        // Empty TOML exercises the compiled defaults without touching the
        // XDG hierarchy or environment of the test machine.
        let config = reldigest_config::load_and_validate_str("")
            .expect("default config should be valid");
        assert_eq!(config.service.name, "reldigest");
        assert_eq!(config.gateway.port, 8080);
    }
}
