/// Frequency counts for charts and filter option lists.
use super::normalize::normalize_label;
use crate::model::{ConditionClass, SignageRecord};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Categorical column used for bar charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CategoricalField {
    Type,
    Category,
    Material,
}

impl CategoricalField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Type => "Tipo",
            Self::Category => "Categoria",
            Self::Material => "Material",
        }
    }

    fn value(self, record: &SignageRecord) -> Option<&str> {
        match self {
            Self::Type => Some(record.raw().sign_type.as_str()),
            Self::Category => record.raw().category.as_deref(),
            Self::Material => Some(record.raw().material.as_str()),
        }
    }
}

/// Column offered as a filter choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
    Route,
    Identifier,
    Lane,
}

/// A `(label, count)` pair for a bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

/// Number of records in one condition class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassCount {
    pub class: ConditionClass,
    pub count: u64,
}

/// Count records per class, always in [`ConditionClass::ALL`] order,
/// including classes with zero records.
pub fn classification_breakdown<'a, I>(records: I) -> Vec<ClassCount>
where
    I: IntoIterator<Item = &'a SignageRecord>,
{
    let mut counts = [0u64; 4];
    for record in records {
        let slot = ConditionClass::ALL
            .iter()
            .position(|c| *c == record.classification())
            .unwrap_or(3);
        counts[slot] += 1;
    }
    ConditionClass::ALL
        .into_iter()
        .zip(counts)
        .map(|(class, count)| ClassCount { class, count })
        .collect()
}

/// Count records per normalized label of `field`, most frequent first.
///
/// Labels are collapsed with [`normalize_label`] so that spelling variants
/// share a bucket. Records without the field (horizontal category) are
/// skipped. Equal counts keep first-appearance order.
pub fn label_frequencies<'a, I>(records: I, field: CategoricalField) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a SignageRecord>,
{
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<LabelCount> = Vec::new();

    for record in records {
        let Some(value) = field.value(record) else {
            continue;
        };
        let label = normalize_label(value);
        match positions.get(&label) {
            Some(&pos) => buckets[pos].count += 1,
            None => {
                positions.insert(label.clone(), buckets.len());
                buckets.push(LabelCount { label, count: 1 });
            }
        }
    }

    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}

/// Earliest and latest record date, or `None` for an empty batch.
pub fn date_bounds<'a, I>(records: I) -> Option<(NaiveDate, NaiveDate)>
where
    I: IntoIterator<Item = &'a SignageRecord>,
{
    records.into_iter().fold(None, |acc, record| {
        let d = record.date();
        Some(match acc {
            None => (d, d),
            Some((min, max)) => (min.min(d), max.max(d)),
        })
    })
}

/// Sorted distinct values of a normalized key column.
pub fn distinct_values<'a, I>(records: I, field: KeyField) -> Vec<String>
where
    I: IntoIterator<Item = &'a SignageRecord>,
{
    let set: BTreeSet<&str> = records
        .into_iter()
        .map(|record| match field {
            KeyField::Route => record.route(),
            KeyField::Identifier => record.identifier(),
            KeyField::Lane => record.lane(),
        })
        .collect();
    set.into_iter().map(str::to_string).collect()
}
