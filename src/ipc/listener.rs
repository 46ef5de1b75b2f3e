//! Line-oriented [`CommandSource`] implementation.
//!
//! Reads newline-delimited JSON [`Command`]s from any buffered reader.  The
//! binary wires it to stdin so another process (or a person at a terminal)
//! can drive the scanner.
//!
//! # Wire format
//!
//! Every message is a single line of JSON followed by `\n`:
//!
//! ```json
//! "StartScanning"
//! {"SetCanvasSize":{"width":1024.0,"height":480.0}}
//! {"SetVisible":{"index":0,"visible":false}}
//! {"Window":"maximize"}
//! {"Window":"close"}
//! ```

use crate::command::Command;
use crate::traits::CommandSource;
use log::{debug, error, info};
use std::io::BufRead;
use std::sync::mpsc;

/// A [`CommandSource`] that reads one JSON command per line.
///
/// Blank lines are skipped and malformed lines are logged and dropped.  The
/// source finishes at end of input or when the sink is closed.
pub struct LineCommandSource<R> {
    reader: R,
}

/// Errors produced by the line command source.
#[derive(Debug, thiserror::Error)]
pub enum LineSourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl<R: BufRead + Send> LineCommandSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead + Send> CommandSource for LineCommandSource<R> {
    type Error = LineSourceError;

    /// Read commands until end of input.
    ///
    /// This method **blocks** on the reader.  Run it on a dedicated thread.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error> {
        let mut line = Vec::new();
        loop {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                info!("end of command input");
                return Ok(());
            }
            let text = match std::str::from_utf8(&line) {
                Ok(text) => text.trim(),
                Err(e) => {
                    error!("bad command: not UTF-8 ({})", e);
                    continue;
                }
            };
            if text.is_empty() {
                continue;
            }
            match serde_json::from_str::<Command>(text) {
                Ok(cmd) => {
                    debug!("received {:?}", cmd);
                    if sink.send(cmd).is_err() {
                        info!("sink closed, shutting down");
                        return Ok(());
                    }
                }
                Err(e) => {
                    error!("bad command: {} ({})", text, e);
                }
            }
        }
    }
}

//  Tests
