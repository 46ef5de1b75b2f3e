//! Entry point for the **wifiscanner** command.
//!
//! By default runs one scan, prints the networks and exits.
//!
//! With `--listen` it keeps running: JSON commands are read from stdin on a
//! background thread and executed on the main thread, and the network list
//! is printed again every time it changes.  A `{"Window":"close"}` command
//! or end of input stops it.
//!
//! `--json` prints JSON instead of a table.  Logging is controlled with
//! `RUST_LOG`.

use log::{error, info};
use std::io::BufReader;
use std::sync::mpsc;
use wifiscanner::command::Command;
use wifiscanner::config::Config;
use wifiscanner::ipc::listener::LineCommandSource;
use wifiscanner::netsh::scanner::NetshScanner;
use wifiscanner::network::NetworkRecord;
use wifiscanner::report::{self, OutputFormat};
use wifiscanner::traits::CommandSource;
use wifiscanner::viewmodel::AppViewModel;
use wifiscanner::window::HeadlessWindow;

/// Try to load the config from the per-user config directory, falling back
/// to compiled-in defaults.
fn load_config() -> Config {
    let Some(path) = Config::default_path() else {
        info!("no config directory, using defaults");
        return Config::default();
    };
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn print_networks(networks: &[NetworkRecord], format: OutputFormat) {
    match report::render(networks, format) {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => error!("failed to render networks: {}", e),
    }
}

//  Main

fn main() {
    env_logger::init();

    let config = load_config();
    let format = if std::env::args().any(|a| a == "--json") {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let listen = std::env::args().any(|a| a == "--listen");

    let mut vm = AppViewModel::new(NetshScanner::new(), config.viewport);
    vm.on_networks_changed(move |networks| print_networks(networks, format));

    if listen {
        run_listener(vm);
    } else {
        run_once(vm);
    }
}

/// Single scan mode.
fn run_once(mut vm: AppViewModel<NetshScanner>) {
    if let Err(e) = vm.start_scanning() {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Command-driven mode.
fn run_listener(mut vm: AppViewModel<NetshScanner>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_stdin_source(cmd_tx);

    let mut window = HeadlessWindow::new();
    info!("wifiscanner reading commands from stdin");
    for cmd in cmd_rx {
        if let Err(e) = vm.handle(cmd, &mut window) {
            error!("command error: {}", e);
        }
        if window.is_closed() {
            break;
        }
    }
    info!("exiting");
}

//  Helpers

fn spawn_stdin_source(tx: mpsc::Sender<Command>) {
    std::thread::spawn(move || {
        let mut source = LineCommandSource::new(BufReader::new(std::io::stdin()));
        if let Err(e) = source.run(tx) {
            error!("command input error: {}", e);
        }
    });
}
