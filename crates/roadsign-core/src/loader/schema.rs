/// Column layouts of the two inventory files.
use crate::model::SignageKind;
use std::collections::HashMap;

pub const COL_IDENTIFIER: &str = "sre";
pub const COL_DATE: &str = "data";
pub const COL_LANE: &str = "pista";
pub const COL_TYPE: &str = "tipo";
pub const COL_MATERIAL: &str = "material";
pub const COL_CATEGORY: &str = "categoria_sinal";
pub const COL_CONDITION_VERTICAL: &str = "condicoes";
pub const COL_CONDITION_HORIZONTAL: &str = "condicao";
pub const COL_LAT: &str = "latitude";
pub const COL_LON: &str = "longitude";
pub const COL_LAT_START: &str = "latitude_inicial";
pub const COL_LON_START: &str = "longitude_inicial";
pub const COL_LAT_END: &str = "latitude_final";
pub const COL_LON_END: &str = "longitude_final";

/// Optional photo columns, first present wins.
pub const PHOTO_COLUMNS: &[&str] = &["foto", "fotos", "imagem", "imagens"];

const VERTICAL_COLUMNS: &[&str] = &[
    COL_IDENTIFIER,
    COL_DATE,
    COL_LANE,
    COL_TYPE,
    COL_MATERIAL,
    COL_CATEGORY,
    COL_CONDITION_VERTICAL,
    COL_LAT,
    COL_LON,
];

const HORIZONTAL_COLUMNS: &[&str] = &[
    COL_IDENTIFIER,
    COL_DATE,
    COL_LANE,
    COL_TYPE,
    COL_MATERIAL,
    COL_CONDITION_HORIZONTAL,
    COL_LAT_START,
    COL_LON_START,
    COL_LAT_END,
    COL_LON_END,
];

/// Columns that must be present in the header for `kind`.
pub fn required_columns(kind: SignageKind) -> &'static [&'static str] {
    match kind {
        SignageKind::Vertical => VERTICAL_COLUMNS,
        SignageKind::Horizontal => HORIZONTAL_COLUMNS,
    }
}

/// Column holding the free-text condition for `kind`.
pub fn condition_column(kind: SignageKind) -> &'static str {
    match kind {
        SignageKind::Vertical => COL_CONDITION_VERTICAL,
        SignageKind::Horizontal => COL_CONDITION_HORIZONTAL,
    }
}

/// Header name → position, matched case-insensitively after trimming.
#[derive(Debug, Clone)]
pub struct ColumnIndex {
    positions: HashMap<String, usize>,
    photo: Option<usize>,
}

impl ColumnIndex {
    pub fn from_headers<'h>(headers: impl IntoIterator<Item = &'h str>) -> Self {
        let mut positions = HashMap::new();
        for (i, name) in headers.into_iter().enumerate() {
            let key = name.trim_start_matches('\u{feff}').trim().to_lowercase();
            positions.entry(key).or_insert(i);
        }
        let photo = PHOTO_COLUMNS
            .iter()
            .find_map(|name| positions.get(*name).copied());
        Self { positions, photo }
    }

    /// Required columns of `kind` absent from the header.
    pub fn missing(&self, kind: SignageKind) -> Vec<String> {
        required_columns(kind)
            .iter()
            .filter(|col| !self.positions.contains_key(**col))
            .map(|col| col.to_string())
            .collect()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    pub fn photo(&self) -> Option<usize> {
        self.photo
    }
}
