// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use planner_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::arg::CommonArgs;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_session::CmdSession;
use crate::config::parse_config;

const PLANNER_LOG_ENV: &str = "PLANNER_LOG";

/// Run the planner command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let matches = Cli::command().get_matches();
    let result = match Cli::from(matches) {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        println!("{} {}", "Error:".red(), e);
    }
    Ok(())
}

/// Logs go to stderr so they never mix with session output.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(PLANNER_LOG_ENV).unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Top-level invocation of the `planner` binary.
#[derive(Debug)]
pub struct Cli {
    /// Explicit configuration file, overriding `$PLANNER_CONFIG`
    pub config: Option<PathBuf>,

    /// What to do once the configuration is known
    pub command: Commands,
}

impl Cli {
    /// Build the argument parser of the binary
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        let config = arg!(-c --config [CONFIG] "Path to the configuration file")
            .long_help(
                "\
Path to the configuration file. Defaults to $PLANNER_CONFIG, then \
$XDG_CONFIG_HOME/planner/config.toml on Linux and MacOS, \
%APPDATA%/planner/config.toml on Windows.",
            )
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath);

        let script = arg!(--script [SCRIPT] "Read session lines from a file instead of stdin")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath);

        Command::new(APP_NAME)
            .about("A small todo and event planner for your terminal.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // no subcommand starts a session
            .args([config, script, CommonArgs::output_format()])
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse an argument list, `args[0]` being the binary name
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from(Self::command().try_get_matches_from(args)?)
    }

    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        let command = match matches.subcommand() {
            Some((CmdGenerateCompletion::NAME, sub)) => {
                Commands::GenerateCompletion(CmdGenerateCompletion::from(sub))
            }
            Some((name, _)) => return Err(format!("Unknown command '{name}'").into()),
            None => Commands::Session(CmdSession {
                script: matches.get_one("script").cloned(),
                output_format: CommonArgs::get_output_format(&matches),
            }),
        };

        Ok(Cli {
            config: matches.get_one("config").cloned(),
            command,
        })
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        match self.command {
            Commands::Session(session) => {
                tracing::debug!("parsing configuration...");
                let config = parse_config(self.config).await?;
                session.run(config).await
            }
            // Completion scripts do not depend on the configuration
            Commands::GenerateCompletion(a) => a.run(),
        }
    }
}

/// What a `planner` invocation does
#[derive(Debug, Clone)]
pub enum Commands {
    /// Run a planner session
    Session(CmdSession),

    /// Print a shell completion script
    GenerateCompletion(CmdGenerateCompletion),
}
