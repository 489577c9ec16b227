//! Terminal host for heed alerts.
//!
//! Type `offline`, `retry`, `error`, `camera`, `restricted` or `delete` to
//! show an alert, a button number to press it, `esc` to dismiss, `clear` to
//! empty the slot. `RUST_LOG=debug` shows controller transitions and
//! `HEED_LOCALE=de` switches the labels.

use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use anyhow::Context;
use heed_alert::*;
use heed_core::Composition;

#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("buttons are numbered from 1")]
    ZeroIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Demo {
    Offline,
    OfflineRetry,
    UnknownError,
    Camera,
    Restricted,
    Delete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Show(Demo),
    Press(usize),
    Escape,
    Clear,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim();
        if word.is_empty() {
            return Err(CommandError::Empty);
        }
        if let Ok(n) = word.parse::<usize>() {
            return n
                .checked_sub(1)
                .map(Command::Press)
                .ok_or(CommandError::ZeroIndex);
        }
        Ok(match word.to_ascii_lowercase().as_str() {
            "offline" => Command::Show(Demo::Offline),
            "retry" => Command::Show(Demo::OfflineRetry),
            "error" => Command::Show(Demo::UnknownError),
            "camera" => Command::Show(Demo::Camera),
            "restricted" => Command::Show(Demo::Restricted),
            "delete" => Command::Show(Demo::Delete),
            "esc" | "escape" => Command::Escape,
            "clear" => Command::Clear,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        })
    }
}

fn say(msg: &'static str) -> impl Fn() + 'static {
    move || println!("-> {msg}")
}

impl Demo {
    fn configuration(self, slot: &AlertSlot) -> AlertConfiguration {
        match self {
            Demo::Offline => AlertConfiguration::no_network(None),
            Demo::OfflineRetry => {
                // Retrying while still offline puts a fresh alert in the slot.
                let slot = slot.clone();
                AlertConfiguration::no_network(Some(Rc::new(move || {
                    println!("-> retrying... still offline");
                    slot.set(Some(AlertConfiguration::no_network(None)));
                })))
            }
            Demo::UnknownError => {
                AlertConfiguration::unknown_error(Some(Rc::new(say("retrying request"))))
            }
            Demo::Camera => AlertConfiguration::permissions_denied(
                PermissionKind::Camera,
                Some(Rc::new(say("camera prompt closed"))),
                say("opening settings"),
            ),
            Demo::Restricted => {
                AlertConfiguration::permissions_restricted(PermissionKind::Location, None)
            }
            Demo::Delete => AlertConfiguration::specific_with_actions(
                "Delete 3 files?",
                "They will be moved to the trash.",
                AlertAction::destructive("Delete", say("deleted")),
                AlertAction::plain("Archive", say("archived")),
                true,
            ),
        }
    }
}

/// Prints an alert once when it appears and a note when it goes away.
struct ConsoleHost<W: Write> {
    out: W,
    showing: Option<AlertId>,
}

impl<W: Write> ConsoleHost<W> {
    fn new(out: W) -> Self {
        Self { out, showing: None }
    }

    fn write(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            log::error!("console write failed: {e}");
        }
    }
}

impl<W: Write> AlertHost for ConsoleHost<W> {
    fn present(&mut self, frame: &AlertFrame) {
        if self.showing == Some(frame.id) {
            return;
        }
        self.showing = Some(frame.id);
        self.write(&format!("\n{frame}"));
    }

    fn dismiss(&mut self) {
        if self.showing.take().is_some() {
            self.write("(alert closed)");
        }
    }
}

const HELP: &str = "commands: offline | retry | error | camera | restricted | delete \
                    | <button number> | esc | clear | quit";

/// One composition pass: the slot and controller are remembered across passes.
fn app(host: &mut impl AlertHost) -> (Rc<AlertSlot>, Rc<AlertController>) {
    let slot = remember_alert_slot();
    let controller = remember_alert_with_key("console", &slot);
    controller.drive(host);
    (slot, controller)
}

fn run() -> anyhow::Result<()> {
    let mut composition = Composition::new();
    let mut host = ConsoleHost::new(io::stdout());
    let (slot, controller) = composition.frame(|| app(&mut host));

    println!("{HELP}");
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match command {
            Command::Show(demo) => slot.set(Some(demo.configuration(&slot))),
            Command::Press(index) => {
                if let Selection::Ignored(reason) = controller.select(index) {
                    eprintln!("ignored: {reason:?}");
                }
            }
            Command::Escape => {
                controller.handle(AlertEvent::Dismissed);
            }
            Command::Clear => slot.set(None),
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
        }

        composition.frame(|| app(&mut host));
    }

    log::info!("exiting after {} frames", composition.frames());
    composition.dispose();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let strings = match std::env::var("HEED_LOCALE").as_deref() {
        Ok("de") => AlertStrings::german(),
        _ => AlertStrings::default(),
    };
    with_alert_strings(strings, run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("2".parse::<Command>().unwrap(), Command::Press(1));
        assert_eq!(" Camera ".parse::<Command>().unwrap(), Command::Show(Demo::Camera));
        assert_eq!("esc".parse::<Command>().unwrap(), Command::Escape);
        assert!(matches!("0".parse::<Command>(), Err(CommandError::ZeroIndex)));
        assert!(matches!("".parse::<Command>(), Err(CommandError::Empty)));
        assert!(matches!(
            "launch".parse::<Command>(),
            Err(CommandError::Unknown(word)) if word == "launch"
        ));
    }

    #[test]
    fn test_console_host_prints_each_alert_once() {
        let slot: AlertSlot = heed_core::signal(None);
        let controller = AlertController::new(&slot);
        let mut host = ConsoleHost::new(Vec::new());

        slot.set(Some(Demo::Offline.configuration(&slot)));
        controller.drive(&mut host);
        controller.drive(&mut host);
        controller.select(0);
        controller.drive(&mut host);

        let out = String::from_utf8(host.out).unwrap();
        assert_eq!(out.matches("== No network connection ==").count(), 1);
        assert!(out.contains("[1] OK (cancel)"));
        assert!(out.ends_with("(alert closed)\n"));
    }

    #[test]
    fn test_retry_while_offline_shows_follow_up() {
        let slot: AlertSlot = heed_core::signal(None);
        let controller = AlertController::new(&slot);
        slot.set(Some(Demo::OfflineRetry.configuration(&slot)));
        let first = controller.current().unwrap().id();

        assert_eq!(controller.select(0), Selection::Invoked);
        assert!(controller.is_shown());
        assert_ne!(controller.current().unwrap().id(), first);
    }
}
