use super::with_reference;
use crate::config::LicensingConfig;
use crate::server::{self, AppState};
use anyhow::Result;
use std::path::PathBuf;

pub async fn run_serve_command(
    bind: Option<String>,
    reference: Option<PathBuf>,
    config: LicensingConfig,
) -> Result<()> {
    let mut config = with_reference(config, reference);
    if let Some(bind) = bind {
        config.bind = bind;
    }

    server::serve(AppState::from_config(config)).await?;
    Ok(())
}
