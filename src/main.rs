//! squad-dispatch - headless dashboard driver.
//!
//! Reads JSONL commands from stdin, applies them to a [`Dashboard`] and prints one
//! JSON snapshot per command to stdout. Logs go to stderr and
//! `~/.squad/logs/squad-dispatch.jsonl`.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use squad_dispatch::clock::SystemClock;
use squad_dispatch::config;
use squad_dispatch::dashboard::Dashboard;
use squad_dispatch::error::ResultExt;
use squad_dispatch::logging;
use squad_dispatch::stdin_commands::{apply_command, start_stdin_listener, Applied};
use squad_dispatch::toast::{ToastRequest, ToastVariant};

#[derive(Parser, Debug)]
#[command(name = "squad-dispatch", version, about = "Drive the dashboard from JSONL on stdin")]
struct Args {
    /// Config file (defaults to $SQUAD_CONFIG or ~/.squad/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print snapshots
    #[arg(long)]
    pretty: bool,
}

fn print_snapshot(dashboard: &Dashboard, pretty: bool, out: &mut impl Write) -> Result<()> {
    let snapshot = dashboard.snapshot();
    let line = if pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    writeln!(out, "{}", line)?;
    out.flush().context("flushing stdout")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = logging::init();

    let config = match &args.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => config::load_config(),
    };
    logging::log(
        "APP",
        &format!(
            "Loaded config: toast={}ms, starter={}, palette={:?}",
            config.toast.default_duration_ms, config.search.starter_limit, config.hotkeys.palette
        ),
    );

    let mut dashboard = Dashboard::new(config, Arc::new(SystemClock));
    let commands = start_stdin_listener();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    while let Ok(command) = commands.recv_blocking() {
        match apply_command(&mut dashboard, command) {
            Ok(Applied::Done) => {}
            Ok(Applied::Wait(duration)) => std::thread::sleep(duration),
            Err(e) => {
                logging::log_error("APP", &e.to_string(), None);
                dashboard.toasts().enqueue(
                    ToastRequest::new(ToastVariant::from_severity(e.severity()), e.user_message()),
                );
            }
        }
        dashboard.tick();
        print_snapshot(&dashboard, args.pretty, &mut out).log_err();
    }

    logging::log("APP", "stdin closed, shutting down");
    Ok(())
}
