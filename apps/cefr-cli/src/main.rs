mod commands;
mod logging;

use std::env;
use std::io;

use cefr_analysis::build_analyzer;
use cefr_core::config::Config;

fn main() -> anyhow::Result<()> {
    let mut args = env::args();
    let prog = args.next().unwrap_or_else(|| "cefr".to_string());
    let args: Vec<String> = args.collect();
    let invocation = commands::parse_args(&args).unwrap_or_else(|msg| {
        eprintln!("{}", msg);
        eprintln!("{}", commands::usage(&prog));
        std::process::exit(1)
    });

    let config = match &invocation.config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    logging::init(&settings.logging);

    let analyzer = build_analyzer(&settings)?;
    tracing::debug!(command = ?invocation.command, "running command");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(invocation.command, &analyzer, io::stdin().lock(), &mut out)
}
