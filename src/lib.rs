//! **wifiscanner** lists nearby Wi-Fi networks on Windows.
//!
//! A scan runs `netsh wlan show networks mode=bssid`, and the text it
//! prints is parsed into [`network::NetworkRecord`]s, each tagged with a
//! colour from a fixed palette so a front-end can draw the networks on a
//! channel/signal graph.
//!
//! # Architecture
//!
//! The crate is organised around three traits in [`traits`]:
//!
//! * [`traits::ScanSource`] produces raw scan text, so the parser and view
//!   model are not tied to netsh.
//! * [`traits::WindowHandle`] is the window that [`command::WindowCommand`]s
//!   act on.
//! * [`traits::CommandSource`] is the transport that delivers commands.
//!
//! [`viewmodel::AppViewModel`] ties them together and exposes its state
//! through [`observable::Observable`] subscriptions.  Concrete
//! implementations live in [`netsh`] (the scan command), [`window`]
//! (a headless window) and [`ipc`] (JSON commands over a reader).

pub mod command;
pub mod config;
pub mod ipc;
pub mod netsh;
pub mod network;
pub mod observable;
pub mod parser;
pub mod report;
pub mod traits;
pub mod viewmodel;
pub mod window;
