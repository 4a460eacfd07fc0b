/// Record filtering by caller-supplied predicates.
///
/// Every option is an AND-ed predicate; unset options let every record
/// through. The result borrows from the input and keeps its order.
use crate::model::{ConditionClass, SignageRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `true` when `date` lies within the range, ends included. A reversed
    /// range contains nothing.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Filter options. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Route code, compared case-insensitively.
    pub route: Option<String>,
    /// Uppercased SRE, exact.
    pub identifier: Option<String>,
    /// Uppercased lane, exact.
    pub lane: Option<String>,
    pub classification: Option<ConditionClass>,
    pub date_range: Option<DateRange>,
}

impl FilterSet {
    /// `true` when no option is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_lane(mut self, lane: impl Into<String>) -> Self {
        self.lane = Some(lane.into());
        self
    }

    pub fn with_classification(mut self, class: ConditionClass) -> Self {
        self.classification = Some(class);
        self
    }

    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some(DateRange::new(start, end));
        self
    }
}

/// Predicate form of a [`FilterSet`] with the route pre-uppercased.
struct Matcher<'f> {
    route: Option<String>,
    set: &'f FilterSet,
}

impl<'f> Matcher<'f> {
    fn new(set: &'f FilterSet) -> Self {
        Self {
            route: set.route.as_deref().map(str::to_uppercase),
            set,
        }
    }

    fn matches(&self, record: &SignageRecord) -> bool {
        if let Some(route) = &self.route {
            if record.route() != route.as_str() {
                return false;
            }
        }
        if let Some(identifier) = &self.set.identifier {
            if record.identifier() != identifier.as_str() {
                return false;
            }
        }
        if let Some(lane) = &self.set.lane {
            if record.lane() != lane.as_str() {
                return false;
            }
        }
        if let Some(class) = self.set.classification {
            if record.classification() != class {
                return false;
            }
        }
        if let Some(range) = &self.set.date_range {
            if !range.contains(record.date()) {
                return false;
            }
        }
        true
    }
}

/// Keep the records matching every set option, in input order.
pub fn filter<'a, I>(records: I, set: &FilterSet) -> Vec<&'a SignageRecord>
where
    I: IntoIterator<Item = &'a SignageRecord>,
{
    if let Some(range) = &set.date_range {
        if range.start > range.end {
            tracing::debug!(start = %range.start, end = %range.end, "reversed date range");
            return Vec::new();
        }
    }

    let matcher = Matcher::new(set);
    let kept: Vec<&SignageRecord> = records
        .into_iter()
        .filter(|record| matcher.matches(record))
        .collect();

    tracing::debug!(kept = kept.len(), "filter applied");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::fixtures::{record, vertical};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<SignageRecord> {
        let rows = [
            ("GO060-1", "Direita", "boa", date(2024, 1, 10)),
            ("GO060-2", "Esquerda", "ruim", date(2024, 2, 10)),
            ("BR153-1", "Direita", "regular", date(2024, 3, 10)),
            ("GO070-1", "Direita", "boa", date(2024, 4, 10)),
            ("BR153-2", "Central", "sem dados", date(2024, 5, 10)),
        ];
        rows.iter()
            .map(|(sre, lane, cond, d)| {
                let mut raw = vertical(sre, cond);
                raw.lane = lane.to_string();
                raw.date = *d;
                record(raw)
            })
            .collect()
    }

    fn ids(batch: &[&SignageRecord]) -> Vec<String> {
        batch.iter().map(|r| r.identifier().to_string()).collect()
    }

    #[test]
    fn empty_filter_passes_everything_in_order() {
        let recs = sample();
        let out = filter(&recs, &FilterSet::default());
        assert_eq!(
            ids(&out),
            vec!["GO060-1", "GO060-2", "BR153-1", "GO070-1", "BR153-2"]
        );
    }

    #[test]
    fn route_match_is_case_insensitive() {
        let recs = sample();
        let out = filter(&recs, &FilterSet::default().with_route("go0"));
        assert_eq!(ids(&out), vec!["GO060-1", "GO060-2", "GO070-1"]);
    }

    #[test]
    fn unknown_route_yields_empty_batch() {
        let recs = sample();
        let out = filter(&recs, &FilterSet::default().with_route("XYZ"));
        assert!(out.is_empty());
    }

    #[test]
    fn identifier_and_lane_are_exact() {
        let recs = sample();
        let out = filter(&recs, &FilterSet::default().with_identifier("BR153-2"));
        assert_eq!(ids(&out), vec!["BR153-2"]);

        let out = filter(&recs, &FilterSet::default().with_lane("DIREITA"));
        assert_eq!(ids(&out), vec!["GO060-1", "BR153-1", "GO070-1"]);

        // Lane values are compared against the uppercased field.
        let out = filter(&recs, &FilterSet::default().with_lane("Direita"));
        assert!(out.is_empty());
    }

    #[test]
    fn classification_filter() {
        let recs = sample();
        let out = filter(
            &recs,
            &FilterSet::default().with_classification(ConditionClass::Indeterminate),
        );
        assert_eq!(ids(&out), vec!["BR153-2"]);
    }

    #[test]
    fn date_range_is_inclusive() {
        let recs = sample();
        let set = FilterSet::default().with_date_range(date(2024, 2, 10), date(2024, 4, 10));
        let out = filter(&recs, &set);
        assert_eq!(ids(&out), vec!["GO060-2", "BR153-1", "GO070-1"]);
    }

    #[test]
    fn reversed_date_range_is_empty() {
        let recs = sample();
        let set = FilterSet::default().with_date_range(date(2024, 12, 31), date(2024, 1, 1));
        assert!(filter(&recs, &set).is_empty());
    }

    #[test]
    fn predicates_compose_with_and() {
        let recs = sample();
        let set = FilterSet::default()
            .with_route("GO0")
            .with_lane("DIREITA")
            .with_classification(ConditionClass::Good)
            .with_date_range(date(2024, 1, 1), date(2024, 3, 31));
        let out = filter(&recs, &set);
        assert_eq!(ids(&out), vec!["GO060-1"]);
    }

    /// Filtering twice with the same options yields the same batch, and
    /// re-filtering a filtered batch changes nothing.
    #[test]
    fn filter_is_idempotent() {
        let recs = sample();
        let set = FilterSet::default().with_route("br1");
        let first = filter(&recs, &set);
        let second = filter(&recs, &set);
        assert_eq!(first, second);

        let again = filter(first.iter().copied(), &set);
        assert_eq!(again, first);
    }

    #[test]
    fn filter_set_is_empty() {
        assert!(FilterSet::default().is_empty());
        assert!(!FilterSet::default().with_lane("A").is_empty());
    }
}
