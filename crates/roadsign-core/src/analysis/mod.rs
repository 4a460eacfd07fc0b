/// Analysis modules: classification, normalization and aggregation.

pub mod classifier;
pub mod frequency;
pub mod normalize;
pub mod ranking;

pub use classifier::{classify, ClassifierRules, RuleTier};
pub use frequency::{
    classification_breakdown, date_bounds, distinct_values, label_frequencies, CategoricalField,
    ClassCount, KeyField, LabelCount,
};
pub use normalize::{normalize_label, route_code};
pub use ranking::{rank_routes, rank_routes_with_limit, RouteRanking, RouteRankings, TOP_ROUTES};
