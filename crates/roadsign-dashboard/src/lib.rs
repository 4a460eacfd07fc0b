/// RoadSign Dashboard: headless dashboard state and view models.
///
/// Business logic lives in `roadsign-core`. This crate tracks what the user
/// selected and assembles the charts, map layer and rankings one page
/// shows; drawing them is left to the frontend.
pub mod config;
pub mod format;
pub mod report;
pub mod state;
pub mod view;

pub use config::DashboardConfig;
pub use roadsign_core::model::SignageKind;
pub use state::{DashboardState, FilterOptions};
pub use view::DashboardView;
