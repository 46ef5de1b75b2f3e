//! The application state that a front-end binds to.
//!
//! [`AppViewModel`] owns the [`ScanSource`] and reacts to [`Command`]s by
//! running scans, tracking the canvas size, and forwarding window commands
//! to a [`WindowHandle`].  Front-ends observe it through the `on_*`
//! subscriptions instead of polling.

use crate::command::Command;
use crate::network::{NetworkRecord, Viewport};
use crate::observable::{Observable, SubscriptionId};
use crate::parser::{parse_netsh_output, ParseError};
use crate::traits::{ScanSource, WindowHandle};
use log::{debug, info};

/// Possible errors from the view model.
#[derive(Debug, thiserror::Error)]
pub enum ViewModelError {
    /// The scan source returned an error.
    #[error("scan failed: {0}")]
    Scan(String),

    /// The scan output did not have the expected layout.
    #[error("unexpected scan output: {0}")]
    Parse(#[from] ParseError),

    #[error("no network at index {index} (have {len})")]
    NoSuchNetwork { index: usize, len: usize },

    /// The window handle returned an error.
    #[error("window error: {0}")]
    Window(String),
}

/// Scan results plus the canvas size they are drawn on.
///
/// Generic over any [`ScanSource`], so tests can feed canned netsh output.
///
/// # Typical usage
///
/// ```ignore
/// let mut vm = AppViewModel::new(NetshScanner::new(), Viewport::default());
/// vm.on_networks_changed(|nets| println!("{} network(s)", nets.len()));
/// vm.start_scanning()?;
/// ```
pub struct AppViewModel<S: ScanSource> {
    scanner: S,
    canvas: Observable<Viewport>,
    networks: Observable<Vec<NetworkRecord>>,
}

impl<S: ScanSource> AppViewModel<S> {
    /// Create a view model with an empty network list.
    pub fn new(scanner: S, viewport: Viewport) -> Self {
        Self {
            scanner,
            canvas: Observable::new(viewport),
            networks: Observable::new(Vec::new()),
        }
    }

    /// Current canvas size.
    pub fn viewport(&self) -> Viewport {
        *self.canvas.get()
    }

    /// Networks from the most recent successful scan.
    pub fn networks(&self) -> &[NetworkRecord] {
        self.networks.get()
    }

    /// Record a new canvas size.
    ///
    /// Existing records keep the size they were scanned with; the next scan
    /// picks up the new one.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        if self.canvas.set(Viewport { width, height }) {
            debug!("canvas resized to {}x{}", width, height);
        }
    }

    /// Call `callback` whenever the network list is replaced or edited.
    pub fn on_networks_changed<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Vec<NetworkRecord>) + 'static,
    {
        self.networks.subscribe(callback)
    }

    /// Call `callback` whenever the canvas size changes.
    pub fn on_canvas_resized<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Viewport) + 'static,
    {
        self.canvas.subscribe(callback)
    }

    /// Run a scan and replace the network list with its result.
    ///
    /// Blocks until the scan command exits.  On any error the previous list
    /// is kept.  Returns the number of networks found.
    pub fn start_scanning(&mut self) -> Result<usize, ViewModelError> {
        let output = self
            .scanner
            .scan()
            .map_err(|e| ViewModelError::Scan(e.to_string()))?;
        let networks = parse_netsh_output(&output, self.viewport())?;
        let count = networks.len();
        info!("scan found {} network(s)", count);
        self.networks.replace(networks);
        Ok(count)
    }

    /// Show or hide one network on the graph.
    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<(), ViewModelError> {
        let len = self.networks.get().len();
        let current = self
            .networks
            .get()
            .get(index)
            .ok_or(ViewModelError::NoSuchNetwork { index, len })?;
        if current.visible != visible {
            self.networks.update(|nets| nets[index].visible = visible);
        }
        Ok(())
    }

    /// Process a single [`Command`].
    pub fn handle<W: WindowHandle>(
        &mut self,
        cmd: Command,
        window: &mut W,
    ) -> Result<(), ViewModelError> {
        match cmd {
            Command::StartScanning => {
                info!("scanning");
                self.start_scanning()?;
            }
            Command::SetCanvasSize { width, height } => {
                self.set_canvas_size(width, height);
            }
            Command::SetVisible { index, visible } => {
                debug!("network {} visible = {}", index, visible);
                self.set_visible(index, visible)?;
            }
            Command::Window(wc) => {
                info!("window {}", wc);
                wc.apply(window)
                    .map_err(|e| ViewModelError::Window(e.to_string()))?;
            }
        }
        Ok(())
    }
}
