//! What a renderer needs to put an alert on screen, and what it reports back.

use std::fmt;

use bitflags::bitflags;

use crate::{ActionRole, AlertConfiguration, AlertId, alert_strings};

bitflags! {
    /// Visual treatment hints for one button.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ButtonStyle: u8 {
        /// Default/confirm emphasis (bold, keyboard default).
        const EMPHASIZED = 1 << 0;
        const CANCEL = 1 << 1;
        const DESTRUCTIVE = 1 << 2;
        /// Synthesized OK for an alert without actions.
        const IMPLICIT = 1 << 3;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertButton {
    pub label: String,
    pub role: ActionRole,
    pub style: ButtonStyle,
}

/// Paintable snapshot of a configuration. Button `i` corresponds to
/// `AlertEvent::Selected(i)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertFrame {
    pub id: AlertId,
    pub title: String,
    pub message: String,
    pub buttons: Vec<AlertButton>,
}

impl AlertFrame {
    /// An empty action list yields exactly one implicit, dismiss-only OK.
    pub fn new(config: &AlertConfiguration) -> Self {
        let mut buttons: Vec<AlertButton> = config
            .actions()
            .iter()
            .map(|action| {
                let mut style = ButtonStyle::empty();
                style.set(ButtonStyle::EMPHASIZED, action.is_primary());
                style.set(ButtonStyle::CANCEL, action.role() == ActionRole::Cancel);
                style.set(
                    ButtonStyle::DESTRUCTIVE,
                    action.role() == ActionRole::Destructive,
                );
                AlertButton {
                    label: action.title().to_string(),
                    role: action.role(),
                    style,
                }
            })
            .collect();

        if buttons.is_empty() {
            buttons.push(AlertButton {
                label: alert_strings().ok,
                role: ActionRole::Cancel,
                style: ButtonStyle::IMPLICIT | ButtonStyle::CANCEL,
            });
        }

        Self {
            id: config.id(),
            title: config.title().to_string(),
            message: config.message().to_string(),
            buttons,
        }
    }
}

impl From<&AlertConfiguration> for AlertFrame {
    fn from(config: &AlertConfiguration) -> Self {
        Self::new(config)
    }
}

/// Plain-text rendering, one button per line numbered from 1.
impl fmt::Display for AlertFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {} ==", self.title)?;
        if !self.message.is_empty() {
            writeln!(f, "{}", self.message)?;
        }
        for (i, button) in self.buttons.iter().enumerate() {
            write!(f, "[{}] {}", i + 1, button.label)?;
            if button.style.contains(ButtonStyle::EMPHASIZED) {
                f.write_str(" *")?;
            }
            if button.style.contains(ButtonStyle::DESTRUCTIVE) {
                f.write_str(" (destructive)")?;
            } else if button.style.contains(ButtonStyle::CANCEL) {
                f.write_str(" (cancel)")?;
            }
            if i + 1 < self.buttons.len() {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

/// Reported by a renderer after user interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertEvent {
    Selected(usize),
    /// Closed without choosing a button.
    Dismissed,
}

/// A surface that can show one modal alert at a time.
pub trait AlertHost {
    /// Show `frame`, replacing whatever this host currently shows.
    fn present(&mut self, frame: &AlertFrame);
    /// Hide the modal if one is up. Must tolerate being called while hidden.
    fn dismiss(&mut self);
}
