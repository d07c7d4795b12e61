use agent_licensing::cli::{execute_command, get_log_level, Cli};
use agent_licensing::config::LicensingConfig;
use agent_licensing::error::describe_error_code;
use agent_licensing::LicensingError;
use clap::Parser;
use tracing::{debug, error, trace};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match LicensingConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => std::process::exit(report(&e)),
    };

    // -v flags win over the configured level, RUST_LOG wins over both
    let log_level = get_log_level(cli.verbose).unwrap_or(config.log_level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(cli.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(cli.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("agent-licensing started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = execute_command(cli.command, config).await {
        error!("Fatal error: {:#}", e);
        let exit_code = match e.downcast_ref::<LicensingError>() {
            Some(err) => report(err),
            None => {
                eprintln!("Error: {e:#}");
                1
            }
        };
        std::process::exit(exit_code);
    }
}

/// Print a coded error for the terminal and pick the exit code
fn report(err: &LicensingError) -> i32 {
    eprintln!("Error: {}", err.user_message());
    eprintln!("  [E{:04}] {}", err.code(), describe_error_code(err.code()));
    err.exit_code()
}
