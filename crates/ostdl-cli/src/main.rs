mod cli;

use cli::CliCommand;
use ostdl_core::logging;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is
    // not writable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("ostdl error: {:#}", err);
        std::process::exit(1);
    }
}
