/// Dashboard state management.
///
/// Holds the configuration, the data service, the inventory being viewed
/// and the current filter selection. Every call to [`DashboardState::view`]
/// re-runs filter and aggregation against the cached snapshot; nothing is
/// computed incrementally.
use crate::config::DashboardConfig;
use crate::view::{build_view, DashboardView};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use roadsign_core::analysis::{date_bounds, distinct_values, KeyField};
use roadsign_core::model::{ConditionClass, SignageKind};
use roadsign_core::service::{DataService, Snapshot};
use roadsign_core::{filter, FilterSet};
use std::sync::Arc;
use tracing::info;

/// Values offered by each filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub routes: Vec<String>,
    pub identifiers: Vec<String>,
    pub lanes: Vec<String>,
    pub situations: [ConditionClass; 4],
    /// Earliest and latest date in the table; the default date range.
    pub date_bounds: Option<(NaiveDate, NaiveDate)>,
}

/// All dashboard state.
pub struct DashboardState {
    config: DashboardConfig,
    service: DataService,
    kind: SignageKind,
    selection: FilterSet,
}

impl DashboardState {
    /// Create state for `config`. Nothing is loaded until [`Self::load`].
    pub fn new(config: DashboardConfig) -> Self {
        let service = DataService::new(config.sources(), config.rules());
        Self {
            config,
            service,
            kind: SignageKind::Vertical,
            selection: FilterSet::default(),
        }
    }

    /// Build state from configuration and load both inventories.
    pub fn build(config: DashboardConfig) -> Result<Self> {
        let state = Self::new(config);
        state.load()?;
        Ok(state)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Load (or return the already-loaded) snapshot.
    pub fn load(&self) -> Result<Arc<Snapshot>> {
        let sources = self.service.sources();
        self.service.snapshot().with_context(|| {
            format!(
                "loading inventories {} and {}",
                sources.vertical.display(),
                sources.horizontal.display()
            )
        })
    }

    /// Re-read both inventory files.
    pub fn refresh(&mut self) -> Result<Arc<Snapshot>> {
        let snap = self.service.refresh().context("refreshing inventories")?;
        info!(
            vertical = snap.vertical.len(),
            horizontal = snap.horizontal.len(),
            "Dashboard data refreshed"
        );
        Ok(snap)
    }

    pub fn kind(&self) -> SignageKind {
        self.kind
    }

    /// Switch inventory. The selection is cleared because routes, SREs and
    /// lanes differ between the two tables.
    pub fn set_kind(&mut self, kind: SignageKind) {
        if self.kind != kind {
            self.kind = kind;
            self.selection = FilterSet::default();
        }
    }

    pub fn selection(&self) -> &FilterSet {
        &self.selection
    }

    /// `None` selects all routes ("Todos").
    pub fn select_route(&mut self, route: Option<String>) {
        self.selection.route = route;
    }

    pub fn select_identifier(&mut self, identifier: Option<String>) {
        self.selection.identifier = identifier;
    }

    pub fn select_lane(&mut self, lane: Option<String>) {
        self.selection.lane = lane;
    }

    pub fn select_situation(&mut self, class: Option<ConditionClass>) {
        self.selection.classification = class;
    }

    pub fn select_dates(&mut self, start: NaiveDate, end: NaiveDate) {
        self.selection.date_range = Some(roadsign_core::DateRange::new(start, end));
    }

    /// Drop every filter.
    pub fn clear_selection(&mut self) {
        self.selection = FilterSet::default();
    }

    /// Options for the filter controls of the active inventory.
    pub fn filter_options(&self) -> Result<FilterOptions> {
        let snap = self.load()?;
        let table = snap.table(self.kind);
        Ok(FilterOptions {
            routes: distinct_values(table, KeyField::Route),
            identifiers: distinct_values(table, KeyField::Identifier),
            lanes: distinct_values(table, KeyField::Lane),
            situations: ConditionClass::ALL,
            date_bounds: date_bounds(table),
        })
    }

    /// Filter the active inventory and assemble its page.
    pub fn view(&self) -> Result<DashboardView> {
        let snap = self.load()?;
        let table = snap.table(self.kind);
        let records = filter(table, &self.selection);
        Ok(build_view(
            self.kind,
            &records,
            &self.selection,
            &self.config,
            table.skipped.len(),
        ))
    }
}
