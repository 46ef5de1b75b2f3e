//! Commands understood by the application.
//!
//! [`Command`] describes everything the presentation layer can ask for:
//! running a scan, reporting a new canvas size, toggling a network on the
//! graph, or acting on the window via [`WindowCommand`].
//!
//! Window command names are parsed case-insensitively ("minimize",
//! "Maximize", "CLOSE").

use crate::traits::WindowHandle;
use crate::window::WindowState;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Actions on the application window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WindowCommand {
    Minimize,
    /// Toggle between maximized and normal.  Ignored while minimized.
    Maximize,
    Close,
}

impl fmt::Display for WindowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowCommand::Minimize => write!(f, "minimize"),
            WindowCommand::Maximize => write!(f, "maximize"),
            WindowCommand::Close => write!(f, "close"),
        }
    }
}

fn parse_window_command(s: &str) -> Option<WindowCommand> {
    match s.trim().to_lowercase().as_str() {
        "minimize" => Some(WindowCommand::Minimize),
        "maximize" => Some(WindowCommand::Maximize),
        "close" => Some(WindowCommand::Close),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for WindowCommand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_window_command(&s)
            .ok_or_else(|| DeError::custom(format!("invalid window command: {:?}", s)))
    }
}

impl WindowCommand {
    /// Carry out the command on `window`.
    pub fn apply<W: WindowHandle>(self, window: &mut W) -> Result<(), W::Error> {
        match self {
            WindowCommand::Minimize => window.set_state(WindowState::Minimized),
            WindowCommand::Maximize => match window.state() {
                WindowState::Normal => window.set_state(WindowState::Maximized),
                WindowState::Maximized => window.set_state(WindowState::Normal),
                WindowState::Minimized => Ok(()),
            },
            WindowCommand::Close => window.close(),
        }
    }
}

/// Every action the view model can perform.
///
/// Commands are produced by [`CommandSource`](crate::traits::CommandSource)
/// implementations and consumed by
/// [`AppViewModel::handle`](crate::viewmodel::AppViewModel::handle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Run a scan now and replace the network list with its result.
    StartScanning,

    /// The canvas was resized.  Only affects records from later scans.
    SetCanvasSize { width: f64, height: f64 },

    /// Show or hide the network at `index` on the graph.
    SetVisible { index: usize, visible: bool },

    Window(WindowCommand),
}
