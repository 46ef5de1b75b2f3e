//! [`ScanSource`] implementation backed by `netsh wlan show networks mode=bssid`.
//!
//! Each scan spawns one short-lived `netsh` process and waits for it.  There
//! is no retry and no timeout; whatever the WLAN driver has cached is
//! returned.

use crate::traits::ScanSource;
use log::debug;
use std::process::{Command, Stdio};

/// Program and arguments of the scan command.
const PROGRAM: &str = "netsh";
const ARGS: [&str; 4] = ["wlan", "show", "networks", "mode=bssid"];

/// `CREATE_NO_WINDOW`: keep the console child from flashing a window.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// netsh-backed scanner.  Windows only; elsewhere the spawn fails with
/// [`NetshError::Spawn`].
#[derive(Debug, Default)]
pub struct NetshScanner;

/// Errors that can occur when running netsh.
#[derive(Debug, thiserror::Error)]
pub enum NetshError {
    #[error("failed to run netsh: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("netsh exited with {status}: {message}")]
    Failed { status: String, message: String },
}

impl NetshScanner {
    pub fn new() -> Self {
        Self
    }

    fn command() -> Command {
        let mut cmd = Command::new(PROGRAM);
        cmd.args(ARGS)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }
        cmd
    }
}

impl ScanSource for NetshScanner {
    type Error = NetshError;

    fn scan(&self) -> Result<String, Self::Error> {
        debug!("running {} {}", PROGRAM, ARGS.join(" "));
        let output = Self::command().output()?;

        // netsh reports "no wireless interface" and similar with a non-zero
        // status and the message on stdout.
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                String::from_utf8_lossy(&output.stdout)
            } else {
                stderr
            };
            return Err(NetshError::Failed {
                status: output.status.to_string(),
                message: message.trim().to_string(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("{} returned {} bytes", PROGRAM, text.len());
        Ok(text)
    }
}
