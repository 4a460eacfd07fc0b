/// Per-route ranking by number of good and bad records.
///
/// Routes are counted in a single pass, keyed by first appearance so that
/// ties keep input order after the stable sort.
use crate::model::{ConditionClass, SignageRecord};
use compact_str::CompactString;
use serde::Serialize;
use std::collections::HashMap;

/// Number of routes kept in each ranking list.
pub const TOP_ROUTES: usize = 10;

/// Good/bad counts for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRanking {
    pub route: CompactString,
    pub good: u64,
    pub bad: u64,
}

/// The two ranking lists shown side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteRankings {
    /// Routes with the most `Good` records, descending.
    pub top_good: Vec<RouteRanking>,
    /// Routes with the most `Bad` records, descending.
    pub top_bad: Vec<RouteRanking>,
}

/// Rank routes, keeping the top [`TOP_ROUTES`] of each list.
pub fn rank_routes<'a, I>(records: I) -> RouteRankings
where
    I: IntoIterator<Item = &'a SignageRecord>,
{
    rank_routes_with_limit(records, TOP_ROUTES)
}

/// Rank routes, keeping at most `limit` entries per list.
///
/// Only routes with at least one good or bad record appear; a route missing
/// from one side of the join counts as zero there.
pub fn rank_routes_with_limit<'a, I>(records: I, limit: usize) -> RouteRankings
where
    I: IntoIterator<Item = &'a SignageRecord>,
{
    if limit == 0 {
        return RouteRankings::default();
    }

    // Insertion-ordered accumulation: `order` holds routes by first sighting.
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<RouteRanking> = Vec::new();

    for record in records {
        let pos = *positions.entry(record.route()).or_insert_with(|| {
            order.push(RouteRanking {
                route: CompactString::new(record.route()),
                good: 0,
                bad: 0,
            });
            order.len() - 1
        });
        match record.classification() {
            ConditionClass::Good => order[pos].good += 1,
            ConditionClass::Bad => order[pos].bad += 1,
            ConditionClass::Regular | ConditionClass::Indeterminate => {}
        }
    }

    let joined: Vec<RouteRanking> = order
        .into_iter()
        .filter(|r| r.good > 0 || r.bad > 0)
        .collect();

    // `sort_by` is stable, so equal counts keep first-appearance order.
    let mut top_good = joined.clone();
    top_good.sort_by(|a, b| b.good.cmp(&a.good));
    top_good.truncate(limit);

    let mut top_bad = joined;
    top_bad.sort_by(|a, b| b.bad.cmp(&a.bad));
    top_bad.truncate(limit);

    tracing::debug!(
        good = top_good.len(),
        bad = top_bad.len(),
        "route rankings computed"
    );

    RouteRankings { top_good, top_bad }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::fixtures::{record, vertical};

    fn records(spec: &[(&str, &str)]) -> Vec<SignageRecord> {
        spec.iter()
            .map(|(sre, cond)| record(vertical(sre, cond)))
            .collect()
    }

    fn routes(list: &[RouteRanking]) -> Vec<&str> {
        list.iter().map(|r| r.route.as_str()).collect()
    }

    /// A has 3 good / 1 bad, B has 1 good / 3 bad.
    #[test]
    fn ranks_good_and_bad_independently() {
        let recs = records(&[
            ("AAA1", "boa"),
            ("AAA2", "boa"),
            ("AAA3", "boa"),
            ("AAA4", "ruim"),
            ("BBB1", "boa"),
            ("BBB2", "ruim"),
            ("BBB3", "ruim"),
            ("BBB4", "ruim"),
        ]);
        let ranking = rank_routes(&recs);

        assert_eq!(routes(&ranking.top_good), vec!["AAA", "BBB"]);
        assert_eq!(routes(&ranking.top_bad), vec!["BBB", "AAA"]);
        assert_eq!(ranking.top_good[0].good, 3);
        assert_eq!(ranking.top_good[0].bad, 1);
        assert_eq!(ranking.top_bad[0].bad, 3);
    }

    /// Equal counts keep the order in which routes first appeared.
    #[test]
    fn ties_preserve_first_appearance() {
        let recs = records(&[
            ("CCC1", "boa"),
            ("AAA1", "boa"),
            ("BBB1", "boa"),
            ("AAA2", "ruim"),
            ("CCC2", "ruim"),
            ("BBB2", "ruim"),
        ]);
        let ranking = rank_routes(&recs);

        assert_eq!(routes(&ranking.top_good), vec!["CCC", "AAA", "BBB"]);
        assert_eq!(routes(&ranking.top_bad), vec!["CCC", "AAA", "BBB"]);
    }

    /// First appearance counts any record, including regular ones.
    #[test]
    fn first_appearance_includes_unranked_records() {
        let recs = records(&[
            ("BBB1", "regular"),
            ("AAA1", "boa"),
            ("BBB2", "boa"),
        ]);
        let ranking = rank_routes(&recs);
        assert_eq!(routes(&ranking.top_good), vec!["BBB", "AAA"]);
    }

    /// Missing counts on one side of the join are zero.
    #[test]
    fn outer_join_fills_zeros() {
        let recs = records(&[("AAA1", "boa"), ("BBB1", "ruim")]);
        let ranking = rank_routes(&recs);

        let bbb = ranking
            .top_good
            .iter()
            .find(|r| r.route == "BBB")
            .expect("BBB missing from good list");
        assert_eq!(bbb.good, 0);
        assert_eq!(bbb.bad, 1);
        assert_eq!(routes(&ranking.top_good), vec!["AAA", "BBB"]);
        assert_eq!(routes(&ranking.top_bad), vec!["BBB", "AAA"]);
    }

    /// Routes with only regular/indeterminate records are not ranked.
    #[test]
    fn routes_without_good_or_bad_are_absent() {
        let recs = records(&[("AAA1", "regular"), ("BBB1", "sem dados"), ("CCC1", "bom")]);
        let ranking = rank_routes(&recs);
        assert_eq!(routes(&ranking.top_good), vec!["CCC"]);
        assert_eq!(routes(&ranking.top_bad), vec!["CCC"]);
    }

    #[test]
    fn truncates_to_top_ten() {
        let recs: Vec<SignageRecord> = (0..15)
            .map(|i| record(vertical(&format!("R{i:02}-x"), "boa")))
            .collect();
        let ranking = rank_routes(&recs);
        assert_eq!(ranking.top_good.len(), TOP_ROUTES);
        assert_eq!(ranking.top_bad.len(), TOP_ROUTES);
        assert_eq!(ranking.top_good[0].route, "R00");
    }

    #[test]
    fn custom_limit_and_zero_limit() {
        let recs = records(&[("AAA1", "boa"), ("BBB1", "boa"), ("BBB2", "boa")]);
        let ranking = rank_routes_with_limit(&recs, 1);
        assert_eq!(routes(&ranking.top_good), vec!["BBB"]);

        let empty = rank_routes_with_limit(&recs, 0);
        assert!(empty.top_good.is_empty());
        assert!(empty.top_bad.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_rankings() {
        let ranking = rank_routes(std::iter::empty());
        assert_eq!(ranking, RouteRankings::default());
    }
}
