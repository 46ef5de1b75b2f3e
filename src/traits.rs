//! Core traits that decouple wifiscanner from the scan command, the window
//! system and the transport that delivers user commands.
//!
//! The [`AppViewModel`](crate::viewmodel::AppViewModel) only depends on
//! these abstractions; concrete implementations live in [`netsh`](crate::netsh),
//! [`window`](crate::window) and [`ipc`](crate::ipc).

use crate::command::Command;
use crate::window::WindowState;
use std::sync::mpsc;

/// Something that can list nearby wireless networks as raw text.
///
/// The text is expected in the `netsh wlan show networks mode=bssid`
/// layout understood by [`parse_netsh_output`](crate::parser::parse_netsh_output).
pub trait ScanSource {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Run one scan and return its output.
    ///
    /// Blocks until the scan has finished.
    fn scan(&self) -> Result<String, Self::Error>;
}

/// Abstraction over the application's top-level window.
///
/// A GUI front-end implements this over its native window; the CLI uses
/// [`HeadlessWindow`](crate::window::HeadlessWindow).
pub trait WindowHandle {
    /// The error type produced by this window.
    type Error: std::error::Error + Send + 'static;

    /// Current state of the window.
    fn state(&self) -> WindowState;

    /// Minimize, maximize or restore the window.
    fn set_state(&mut self, state: WindowState) -> Result<(), Self::Error>;

    /// Close the window.  The application is expected to exit afterwards.
    fn close(&mut self) -> Result<(), Self::Error>;
}

//  Command Source

/// A source of [`Command`]s.
///
/// Implementations listen on some transport (stdin, a test harness, ...)
/// and forward parsed commands into the provided [`mpsc::Sender`].
///
/// # Contract
///
/// * [`run`](CommandSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each received command must be sent through `sink` exactly once.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait CommandSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`Command`] into `sink`.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error>;
}
