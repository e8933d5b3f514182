//! editor-bridge: replays a scripted session against the recording widget
//! and prints every widget call as JSON.
//!
//! Usage: editor-bridge <script.json> [--config <config.json>]

use editor_bridge::kernel::services::adapters::ConfigService;
use editor_bridge::replay;
use std::path::PathBuf;
use std::process::ExitCode;

mod logging;

const USAGE: &str = "usage: editor-bridge <script.json> [--config <config.json>]";

struct Args {
    script: PathBuf,
    config: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Option<Args> {
    let mut script = None;
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(args.next()?)),
            "-h" | "--help" => return None,
            _ if script.is_none() => script = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }
    Some(Args {
        script: script?,
        config,
    })
}

fn main() -> ExitCode {
    let Some(args) = parse_args(std::env::args().skip(1)) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    let config = match args.config.as_deref().map(ConfigService::load).transpose() {
        Ok(service) => service.map(ConfigService::into_config),
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let script = match replay::load_script(&args.script) {
        Ok(script) => script,
        Err(e) => {
            tracing::error!(error = %e, "script load failed");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let report = replay::run(script, config);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("cannot encode report: {e}");
            ExitCode::FAILURE
        }
    }
}
