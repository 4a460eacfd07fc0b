/// A single inventory entry plus the fields derived from it.
///
/// Raw fields are exactly what the loader read. Derived fields (route,
/// uppercased labels, classification) are computed from the raw fields when
/// the record is built and recomputed whenever the raw fields are replaced;
/// they have no setters of their own.
use super::condition::ConditionClass;
use crate::analysis::classifier::ClassifierRules;
use crate::analysis::normalize::derive_fields;
use chrono::NaiveDate;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Which inventory a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignageKind {
    /// Plates and posts, located by a single point.
    Vertical,
    /// Road markings, located by a start/end segment.
    Horizontal,
}

impl SignageKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Vertical => "Vertical",
            Self::Horizontal => "Horizontal",
        }
    }

    /// Heading used for map popups.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Vertical => "Sinalização Vertical",
            Self::Horizontal => "Sinalização Horizontal",
        }
    }
}

/// WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Where a record sits on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Point(GeoPoint),
    Segment { start: GeoPoint, end: GeoPoint },
}

/// Fields as read from the source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// SRE code: route prefix followed by the segment.
    pub identifier: String,
    pub date: NaiveDate,
    pub lane: String,
    pub sign_type: String,
    pub material: String,
    /// Sign category; only the vertical inventory carries it.
    pub category: Option<String>,
    /// Free-text condition as typed by the inspector.
    pub condition: String,
    pub geometry: Geometry,
    /// Photo references (file names or URLs), possibly empty.
    pub photos: Vec<String>,
}

/// Values computed from a [`RawRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedFields {
    /// Uppercased SRE.
    pub identifier: String,
    /// First three characters of the uppercased SRE.
    pub route: CompactString,
    pub lane: String,
    pub sign_type: String,
    pub classification: ConditionClass,
}

/// A loaded record with its derived fields attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignageRecord {
    raw: RawRecord,
    derived: DerivedFields,
}

impl SignageRecord {
    /// Build a record, deriving normalized fields and the classification.
    pub fn new(raw: RawRecord, rules: &ClassifierRules) -> Self {
        let derived = derive_fields(&raw, rules);
        Self { raw, derived }
    }

    /// Swap in new raw fields and recompute everything derived from them.
    /// Returns the previous raw fields.
    pub fn replace_raw(&mut self, raw: RawRecord, rules: &ClassifierRules) -> RawRecord {
        self.derived = derive_fields(&raw, rules);
        std::mem::replace(&mut self.raw, raw)
    }

    /// Recompute derived fields under a different rule set.
    pub fn reclassify(&mut self, rules: &ClassifierRules) {
        self.derived = derive_fields(&self.raw, rules);
    }

    pub fn raw(&self) -> &RawRecord {
        &self.raw
    }

    pub fn derived(&self) -> &DerivedFields {
        &self.derived
    }

    pub fn kind(&self) -> SignageKind {
        match self.raw.geometry {
            Geometry::Point(_) => SignageKind::Vertical,
            Geometry::Segment { .. } => SignageKind::Horizontal,
        }
    }

    #[inline]
    pub fn route(&self) -> &str {
        &self.derived.route
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.derived.identifier
    }

    #[inline]
    pub fn lane(&self) -> &str {
        &self.derived.lane
    }

    #[inline]
    pub fn sign_type(&self) -> &str {
        &self.derived.sign_type
    }

    #[inline]
    pub fn classification(&self) -> ConditionClass {
        self.derived.classification
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.raw.date
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Vertical record with sensible defaults for tests.
    pub fn vertical(identifier: &str, condition: &str) -> RawRecord {
        RawRecord {
            identifier: identifier.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            lane: "Direita".to_string(),
            sign_type: "Placa".to_string(),
            material: "Aço".to_string(),
            category: Some("Regulamentação".to_string()),
            condition: condition.to_string(),
            geometry: Geometry::Point(GeoPoint::new(-16.68, -49.25)),
            photos: Vec::new(),
        }
    }

    /// Horizontal record with sensible defaults for tests.
    pub fn horizontal(identifier: &str, condition: &str) -> RawRecord {
        RawRecord {
            identifier: identifier.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            lane: "Central".to_string(),
            sign_type: "Faixa contínua".to_string(),
            material: "Tinta".to_string(),
            category: None,
            condition: condition.to_string(),
            geometry: Geometry::Segment {
                start: GeoPoint::new(-16.68, -49.25),
                end: GeoPoint::new(-16.69, -49.26),
            },
            photos: Vec::new(),
        }
    }

    pub fn record(raw: RawRecord) -> SignageRecord {
        SignageRecord::new(raw, &ClassifierRules::default())
    }
}
