/// View models handed to the presenter.
///
/// A [`DashboardView`] holds everything one dashboard page shows for a
/// filtered batch. Building it is a pure function of the batch, the active
/// filter and the configuration.
use crate::config::DashboardConfig;
use roadsign_core::analysis::{
    classification_breakdown, label_frequencies, rank_routes_with_limit, CategoricalField,
    LabelCount, RouteRanking,
};
use roadsign_core::model::{ConditionClass, SignageKind, SignageRecord};
use roadsign_core::overlay::{build_overlays, MapOverlay};
use roadsign_core::FilterSet;
use serde::Serialize;

/// One pie slice. Classes with no records are left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub class: ConditionClass,
    pub label: &'static str,
    pub color: &'static str,
    pub count: u64,
    /// Fraction of the batch, 0.0–1.0.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub axis_label: &'static str,
    pub bars: Vec<LabelCount>,
}

/// Map contents; only built when a single route is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayer {
    pub title: String,
    pub center: (f64, f64),
    pub zoom: u8,
    pub overlays: Vec<MapOverlay>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub kind: SignageKind,
    pub heading: &'static str,
    pub total: u64,
    pub pie_title: String,
    pub pie: Vec<PieSlice>,
    pub type_bars: BarChart,
    /// Category for vertical signs, material for horizontal markings.
    pub secondary_bars: BarChart,
    pub map: Option<MapLayer>,
    /// Configured length of both ranking lists.
    pub ranking_limit: usize,
    pub best_routes: Vec<RouteRanking>,
    pub worst_routes: Vec<RouteRanking>,
    /// Rows dropped while loading this inventory.
    pub skipped_rows: usize,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Secondary bar chart column for each inventory.
pub fn secondary_field(kind: SignageKind) -> CategoricalField {
    match kind {
        SignageKind::Vertical => CategoricalField::Category,
        SignageKind::Horizontal => CategoricalField::Material,
    }
}

fn map_title(kind: SignageKind) -> &'static str {
    match kind {
        SignageKind::Vertical => "Mapa de Sinalizações Verticais",
        SignageKind::Horizontal => "Mapa de Sinalizações Horizontais",
    }
}

fn bar_chart(records: &[&SignageRecord], field: CategoricalField) -> BarChart {
    BarChart {
        title: format!("Distribuição por {}", field.label()),
        axis_label: field.label(),
        bars: label_frequencies(records.iter().copied(), field),
    }
}

/// Assemble the page for an already-filtered batch.
pub fn build_view(
    kind: SignageKind,
    records: &[&SignageRecord],
    filter: &FilterSet,
    config: &DashboardConfig,
    skipped_rows: usize,
) -> DashboardView {
    let total = records.len() as u64;

    let pie = classification_breakdown(records.iter().copied())
        .into_iter()
        .filter(|c| c.count > 0)
        .map(|c| PieSlice {
            class: c.class,
            label: c.class.label(),
            color: c.class.color(),
            count: c.count,
            share: c.count as f64 / total as f64,
        })
        .collect();

    let map = filter.route.as_ref().map(|_| MapLayer {
        title: map_title(kind).to_string(),
        center: config.map.center,
        zoom: config.map.zoom,
        overlays: build_overlays(records.iter().copied(), &config.image_base_url),
    });

    let rankings = rank_routes_with_limit(records.iter().copied(), config.ranking_limit);

    DashboardView {
        kind,
        heading: kind.heading(),
        total,
        pie_title: format!("Condições das Sinalizações ({})", kind.label()),
        pie,
        type_bars: bar_chart(records, CategoricalField::Type),
        secondary_bars: bar_chart(records, secondary_field(kind)),
        map,
        ranking_limit: config.ranking_limit,
        best_routes: rankings.top_good,
        worst_routes: rankings.top_bad,
        skipped_rows,
    }
}
