//! RoadSign: road signage inventory dashboard.
//!
//! Thin binary entry point. All logic lives in the `roadsign-core`
//! and `roadsign-dashboard` crates.
//!
//! Usage: `roadsign [config.json]`. The data directory may also be set with
//! `ROADSIGN_DATA_DIR`.

use roadsign_dashboard::report;
use roadsign_dashboard::state::DashboardState;
use roadsign_dashboard::{DashboardConfig, SignageKind};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("RoadSign starting");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = DashboardConfig::load(config_path.as_deref())?;

    let mut state = DashboardState::build(config)?;

    for kind in [SignageKind::Vertical, SignageKind::Horizontal] {
        state.set_kind(kind);
        let view = state.view()?;
        println!("{}", report::render(&view));
    }

    Ok(())
}
