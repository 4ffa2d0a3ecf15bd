use clap::Parser;
use hashcheck_core::{config, logging};

mod cli;

use crate::cli::Cli;

fn main() {
    // Config first: it decides where logs go. A bad config never blocks the check.
    let (cfg, cfg_err) = config::load_or_default();

    if cfg.log_to_file {
        if let Err(e) = logging::init_logging() {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable, using stderr: {:#}", e);
        }
    } else {
        logging::init_logging_stderr();
    }
    if let Some(e) = cfg_err {
        tracing::warn!("ignoring config: {:#}", e);
    }

    // clap exits with status 2 on malformed command lines.
    let cli = Cli::parse();
    let code = cli::run(cli, &cfg);
    std::process::exit(code);
}
