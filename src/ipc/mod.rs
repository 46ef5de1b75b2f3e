//! Command transport for front-ends without a GUI.
//!
//! External tools (scripts, a terminal) write newline-delimited JSON
//! commands to the process and the view model executes them.

pub mod listener;
