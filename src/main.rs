use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use segtree_visualizer::{
    command::{Command, HELP},
    config::Config,
    session::Session,
    text_view,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let session = Session::from_config(&config)?;

    let gui_requested = std::env::args().skip(1).any(|a| a == "--gui");
    if gui_requested {
        return run_window(&config, session);
    }

    run_terminal(session)
}

#[cfg(feature = "gui")]
fn run_window(config: &Config, session: Session) -> Result<()> {
    segtree_visualizer::gui::run(config, session)
}

#[cfg(not(feature = "gui"))]
fn run_window(_config: &Config, _session: Session) -> Result<()> {
    anyhow::bail!("this build has no window front end. rebuild with `--features gui`")
}

fn run_terminal(mut session: Session) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", text_view::render(session.tree()))?;
    writeln!(out, "{}", HELP)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line).and_then(|c| session.apply(c)) {
            Ok(outcome) => {
                if !outcome.status.is_empty() {
                    writeln!(out, "{}", outcome.status)?;
                }
                if outcome.tree_changed {
                    writeln!(out, "{}", text_view::render(session.tree()))?;
                }
            }
            Err(e) => writeln!(out, "error: {:#}", e)?,
        }

        if session.is_quit() {
            break;
        }
    }

    tracing::info!("terminal session ended");
    Ok(())
}
