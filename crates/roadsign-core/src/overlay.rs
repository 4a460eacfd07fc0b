/// Map overlay descriptors.
///
/// Converts a filtered batch into plain marker/polyline descriptions in one
/// pass. The rendering layer owns tiles, markers and popup templating; this
/// module only decides geometry, colour and the popup field values.
use crate::model::{GeoPoint, Geometry, SignageKind, SignageRecord};
use serde::Serialize;

/// Default base URL for inventory photos.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://sgpgoinfra.com.br/imagensInventario/";

/// Circle radius for vertical sign markers.
pub const MARKER_RADIUS: u32 = 5;

/// Line weight for horizontal marking segments.
pub const POLYLINE_WEIGHT: u32 = 5;

/// Shape to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OverlayShape {
    Marker { at: GeoPoint, radius: u32 },
    Polyline { path: [GeoPoint; 2], weight: u32 },
}

/// Values shown in a record's popup, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupFields {
    pub heading: &'static str,
    pub identifier: String,
    pub date: String,
    pub lane: String,
    pub sign_type: String,
    pub material: String,
    pub category: Option<String>,
    pub condition: String,
    pub photo_urls: Vec<String>,
}

/// One drawable overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapOverlay {
    pub shape: OverlayShape,
    pub color: &'static str,
    pub popup: PopupFields,
}

/// Resolve a photo reference against `base_url`; absolute URLs pass through.
pub fn photo_url(base_url: &str, reference: &str) -> String {
    let reference = reference.trim();
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let file = reference.trim_start_matches('/');
    format!("{base}/{file}")
}

/// Build one overlay per record, preserving input order.
pub fn build_overlays<'a, I>(records: I, image_base_url: &str) -> Vec<MapOverlay>
where
    I: IntoIterator<Item = &'a SignageRecord>,
{
    records
        .into_iter()
        .map(|record| overlay_for(record, image_base_url))
        .collect()
}

fn overlay_for(record: &SignageRecord, image_base_url: &str) -> MapOverlay {
    let raw = record.raw();
    let shape = match raw.geometry {
        Geometry::Point(at) => OverlayShape::Marker {
            at,
            radius: MARKER_RADIUS,
        },
        Geometry::Segment { start, end } => OverlayShape::Polyline {
            path: [start, end],
            weight: POLYLINE_WEIGHT,
        },
    };
    let kind = record.kind();

    MapOverlay {
        shape,
        color: record.classification().color(),
        popup: PopupFields {
            heading: kind.heading(),
            identifier: record.identifier().to_string(),
            date: raw.date.format("%Y-%m-%d").to_string(),
            lane: record.lane().to_string(),
            sign_type: record.sign_type().to_string(),
            material: raw.material.clone(),
            category: match kind {
                SignageKind::Vertical => raw.category.clone(),
                SignageKind::Horizontal => None,
            },
            condition: raw.condition.clone(),
            photo_urls: raw
                .photos
                .iter()
                .map(|p| photo_url(image_base_url, p))
                .collect(),
        },
    }
}
