//! Window state and the in-memory window used when there is no GUI.

use crate::traits::WindowHandle;
use log::info;
use serde::Serialize;
use std::convert::Infallible;
use std::fmt;

/// Visual state of the application window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

impl fmt::Display for WindowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowState::Normal => write!(f, "normal"),
            WindowState::Minimized => write!(f, "minimized"),
            WindowState::Maximized => write!(f, "maximized"),
        }
    }
}

/// A [`WindowHandle`] that only records what a real window would do.
///
/// Used by the command-line front-end so that window commands arriving on
/// stdin behave consistently: `Close` ends the session, the rest are logged.
#[derive(Debug, Default)]
pub struct HeadlessWindow {
    state: WindowState,
    closed: bool,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`close`](WindowHandle::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl WindowHandle for HeadlessWindow {
    type Error = Infallible;

    fn state(&self) -> WindowState {
        self.state
    }

    fn set_state(&mut self, state: WindowState) -> Result<(), Infallible> {
        info!("window {} -> {}", self.state, state);
        self.state = state;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Infallible> {
        info!("window closed");
        self.closed = true;
        Ok(())
    }
}
