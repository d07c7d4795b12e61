//! Command routing and execution

use crate::cli::args::Commands;
use crate::cli::commands::validate::ValidateParams;
use crate::cli::commands::*;
use crate::config::LicensingConfig;
use anyhow::Result;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Commands, config: LicensingConfig) -> Result<()> {
    match command {
        Commands::Validate {
            file,
            reference,
            export,
            view,
            json,
        } => {
            run_validate_command(
                ValidateParams {
                    file,
                    reference,
                    export,
                    view,
                    json,
                },
                config,
            )
            .await
        }
        Commands::Export {
            file,
            reference,
            output,
        } => run_export_command(file, reference, output, config).await,
        Commands::Serve { bind, reference } => run_serve_command(bind, reference, config).await,
        Commands::Expiring {
            days,
            as_of,
            reference,
        } => run_expiring_command(days, as_of, reference, config).await,
    }
}
