// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error,
    io::{self, IsTerminal},
    path::PathBuf,
};

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::arg::OutputFormat;
use crate::config::Config;
use crate::session::{Flow, Session};

/// Run an interactive session, or replay a script of session lines.
#[derive(Debug, Clone)]
pub struct CmdSession {
    pub script: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
}

impl CmdSession {
    pub async fn run(self, mut config: Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "starting session...");
        if let Some(format) = self.output_format {
            config.output_format = format;
        }

        let mut session = Session::new(config, io::stdout());
        match self.script {
            Some(path) => Self::replay(&mut session, path).await?,
            None => Self::interact(&mut session).await?,
        }

        let planner = session.planner();
        tracing::debug!(
            todos = planner.total_count(),
            events = planner.event_count(),
            "session ended"
        );
        Ok(())
    }

    async fn replay<W: io::Write>(
        session: &mut Session<W>,
        path: PathBuf,
    ) -> Result<(), Box<dyn Error>> {
        let script = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| format!("Failed to read script at {}: {}", path.display(), e))?;

        for line in script.lines() {
            if session.feed(line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    async fn interact<W: io::Write>(session: &mut Session<W>) -> Result<(), Box<dyn Error>> {
        let interactive = io::stdin().is_terminal();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            if interactive {
                session.prompt()?;
            }

            let Some(line) = lines.next_line().await? else {
                break; // EOF
            };
            if session.feed(&line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }
}
