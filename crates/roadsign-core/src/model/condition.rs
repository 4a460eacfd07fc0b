/// Condition classes assigned to every signage record.
///
/// The set is closed: the classifier maps any text to exactly one variant,
/// falling back to [`ConditionClass::Indeterminate`].
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified condition of a sign or marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConditionClass {
    #[serde(rename = "Boa")]
    Good,
    #[serde(rename = "Ruim")]
    Bad,
    #[serde(rename = "Regular")]
    Regular,
    #[serde(rename = "Indeterminada")]
    Indeterminate,
}

impl ConditionClass {
    /// Every class, in chart order.
    pub const ALL: [ConditionClass; 4] = [
        Self::Good,
        Self::Bad,
        Self::Regular,
        Self::Indeterminate,
    ];

    /// Label shown to inspectors (Portuguese, as printed on the dashboards).
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Boa",
            Self::Bad => "Ruim",
            Self::Regular => "Regular",
            Self::Indeterminate => "Indeterminada",
        }
    }

    /// Fixed chart/map colour for the class.
    pub fn color(self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Bad => "red",
            Self::Regular => "#faa702",
            Self::Indeterminate => "gray",
        }
    }

    /// Parse a display label back into a class (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.label().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for ConditionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
