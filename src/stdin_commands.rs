//! External command handling via stdin.
//!
//! Drives a [`Dashboard`] from JSONL commands so the whole flow can be scripted
//! without a UI. Used for testing and automation.
//!
//! # Protocol
//!
//! Commands are sent as JSON objects, one per line (JSONL format):
//!
//! ```json
//! {"type": "key", "key": "k", "modifiers": ["ctrl"]}
//! {"type": "key", "key": "n", "target": "input"}
//! {"type": "type", "text": "set"}
//! {"type": "click", "index": 0}
//! {"type": "backdrop"}
//! {"type": "helpQuery", "query": "squad"}
//! {"type": "toast", "variant": "success", "title": "Saved", "durationMs": 2000}
//! {"type": "dismiss", "id": "toast_1"}
//! {"type": "quickAction", "id": "new-squad"}
//! {"type": "markRead", "id": "2"}
//! {"type": "markAllRead"}
//! {"type": "wait", "ms": 4000}
//! {"type": "snapshot"}
//! ```
//!
//! # Example Usage
//!
//! ```bash
//! printf '%s\n' '{"type":"key","key":"k","modifiers":["ctrl"]}' '{"type":"type","text":"set"}' \
//!     | ./squad-dispatch
//! ```

use std::time::Duration;

use crate::dashboard::Dashboard;
use crate::error::{DispatchError, Result};
use crate::logging;
use crate::shortcuts::{FocusTarget, KeyEvent, Modifiers};
use crate::toast::{ToastId, ToastRequest, ToastVariant};

/// External commands that can be sent to the app via stdin
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExternalCommand {
    /// Press a key
    Key {
        key: String,
        #[serde(default)]
        modifiers: Vec<String>,
        /// Focus target name ("input", "textarea", ...); document when absent
        #[serde(default)]
        target: Option<String>,
    },
    /// Press each character of `text` as a plain key
    Type { text: String },
    /// Click a result row in the open overlay
    Click { index: usize },
    /// Click outside the overlay
    Backdrop,
    /// Filter the visible help overlay
    HelpQuery { query: String },
    /// Enqueue a toast
    Toast {
        #[serde(default)]
        variant: ToastVariant,
        title: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default, rename = "durationMs")]
        duration_ms: Option<i64>,
    },
    Dismiss { id: String },
    QuickAction { id: String },
    MarkRead { id: String },
    MarkAllRead,
    /// Let time pass, then fire due timers
    Wait { ms: u64 },
    /// Print a snapshot without changing anything
    Snapshot,
}

/// What the caller has to do after [`apply_command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Done,
    /// Advance time by this much, then tick
    Wait(Duration),
}

pub fn parse_command(line: &str) -> Result<ExternalCommand> {
    Ok(serde_json::from_str(line)?)
}

fn key_event(key: &str, modifiers: &[String], target: Option<&str>) -> Result<KeyEvent> {
    let mods = Modifiers::from_names(modifiers).map_err(|source| DispatchError::Shortcut {
        shortcut: modifiers
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(key))
            .collect::<Vec<_>>()
            .join("+"),
        source,
    })?;
    let event = KeyEvent::new(key, mods);
    Ok(match target {
        Some(name) => event.with_target(FocusTarget::from_name(name)),
        None => event,
    })
}

/// Apply one command to the dashboard.
pub fn apply_command(dashboard: &mut Dashboard, command: ExternalCommand) -> Result<Applied> {
    match command {
        ExternalCommand::Key {
            key,
            modifiers,
            target,
        } => {
            let event = key_event(&key, &modifiers, target.as_deref())?;
            let outcome = dashboard.handle_key(&event);
            logging::log("STDIN", &format!("Key {:?} -> {:?}", key, outcome));
        }
        ExternalCommand::Type { text } => dashboard.type_text(&text),
        ExternalCommand::Click { index } => {
            if dashboard.click_result(index).is_none() {
                logging::log("STDIN", &format!("Click on row {} ignored", index));
            }
        }
        ExternalCommand::Backdrop => dashboard.backdrop_click(),
        ExternalCommand::HelpQuery { query } => {
            if !dashboard.help_visible() {
                logging::log("STDIN", "Help query ignored: help is hidden");
            }
            dashboard.set_help_query(query);
        }
        ExternalCommand::Toast {
            variant,
            title,
            description,
            duration_ms,
        } => {
            let mut request = ToastRequest::new(variant, title);
            request.description = description;
            request.duration_ms = duration_ms;
            dashboard.toasts().enqueue(request);
        }
        ExternalCommand::Dismiss { id } => {
            dashboard.dismiss_toast(&ToastId::from(id));
        }
        ExternalCommand::QuickAction { id } => {
            if !dashboard.quick_action(&id) {
                logging::log("STDIN", &format!("Unknown quick action: {}", id));
            }
        }
        ExternalCommand::MarkRead { id } => {
            dashboard.mark_read(&id);
        }
        ExternalCommand::MarkAllRead => dashboard.mark_all_read(),
        ExternalCommand::Wait { ms } => return Ok(Applied::Wait(Duration::from_millis(ms))),
        ExternalCommand::Snapshot => {}
    }
    Ok(Applied::Done)
}

/// Start a thread that listens on stdin for external JSONL commands.
/// Returns an async_channel::Receiver fed one parsed command per line.
///
/// Uses a bounded channel with capacity of 100. Lines that fail to parse are
/// logged and skipped. The thread exits when stdin closes or the receiver is dropped.
pub fn start_stdin_listener() -> async_channel::Receiver<ExternalCommand> {
    use std::io::BufRead;

    let (tx, rx) = async_channel::bounded(100);

    std::thread::spawn(move || {
        logging::log("STDIN", "External command listener started");
        let stdin = std::io::stdin();
        let reader = stdin.lock();

        for line in reader.lines() {
            match line {
                Ok(line) if !line.trim().is_empty() => {
                    logging::log_debug("STDIN", &format!("Received: {}", line));
                    match parse_command(&line) {
                        Ok(cmd) => {
                            if tx.send_blocking(cmd).is_err() {
                                logging::log("STDIN", "Command channel closed, exiting");
                                break;
                            }
                        }
                        Err(e) => {
                            logging::log_error("STDIN", &e.to_string(), Some(line.as_str()));
                        }
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    logging::log("STDIN", &format!("Error reading stdin: {}", e));
                    break;
                }
            }
        }
        logging::log("STDIN", "External command listener exiting");
    });

    rx
}
