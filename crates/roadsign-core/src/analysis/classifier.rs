/// Condition classification by keyword containment.
///
/// The condition text is uppercased and checked against an ordered list of
/// keyword tiers. The first tier with any keyword contained anywhere in the
/// text wins; no match yields [`ConditionClass::Indeterminate`]. Matching is
/// substring containment, so overlapping keywords resolve purely by tier
/// order: "INADEQUADO" contains the Good keyword "ADEQUADO" and therefore
/// classifies as Good even though it is also listed as Bad. The default
/// order Good > Bad > Regular must not change.
use crate::model::ConditionClass;
use serde::{Deserialize, Serialize};

/// Keywords for [`ConditionClass::Good`].
pub const GOOD_KEYWORDS: &[&str] = &[
    "BOAS",
    "BOA",
    "BOM",
    "SIMPLES",
    "BOAS CONDIÇÕES",
    "EM BOAS CONDIÇÕES",
    "EXCELENTE",
    "ADEQUADO",
];

/// Keywords for [`ConditionClass::Bad`].
pub const BAD_KEYWORDS: &[&str] = &[
    "RUIM",
    "PÉSSIMO",
    "INADEQUADO",
    "QUEBRADA",
    "AMASSADA",
    "QUEIMADA",
];

/// Keywords for [`ConditionClass::Regular`].
pub const REGULAR_KEYWORDS: &[&str] = &["REGULAR"];

/// Default tiers in priority order.
pub const DEFAULT_TIERS: [(ConditionClass, &[&str]); 3] = [
    (ConditionClass::Good, GOOD_KEYWORDS),
    (ConditionClass::Bad, BAD_KEYWORDS),
    (ConditionClass::Regular, REGULAR_KEYWORDS),
];

/// Classify condition text with the default tiers.
pub fn classify(text: &str) -> ConditionClass {
    let upper = text.to_uppercase();
    DEFAULT_TIERS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| upper.contains(kw)))
        .map_or(ConditionClass::Indeterminate, |(class, _)| *class)
}

/// One priority level: a class and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTier {
    pub class: ConditionClass,
    pub keywords: Vec<String>,
}

/// Ordered, configurable keyword tiers.
///
/// Keywords are uppercased and empty keywords dropped on construction, also
/// when deserialized from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RuleTier>", into = "Vec<RuleTier>")]
pub struct ClassifierRules {
    tiers: Vec<RuleTier>,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self::from_tiers(
            DEFAULT_TIERS
                .iter()
                .map(|(class, keywords)| {
                    (*class, keywords.iter().map(|kw| kw.to_string()).collect())
                })
                .collect(),
        )
    }
}

impl ClassifierRules {
    /// Build rules from `(class, keywords)` pairs; the vector order is the
    /// evaluation order.
    pub fn from_tiers(tiers: Vec<(ConditionClass, Vec<String>)>) -> Self {
        Self {
            tiers: tiers
                .into_iter()
                .map(|(class, keywords)| normalize_tier(RuleTier { class, keywords }))
                .collect(),
        }
    }

    pub fn tiers(&self) -> &[RuleTier] {
        &self.tiers
    }

    /// Classify `text`. Total: every input maps to exactly one class.
    pub fn classify(&self, text: &str) -> ConditionClass {
        let upper = text.to_uppercase();
        self.tiers
            .iter()
            .find(|tier| tier.keywords.iter().any(|kw| upper.contains(kw.as_str())))
            .map_or(ConditionClass::Indeterminate, |tier| tier.class)
    }
}

fn normalize_tier(tier: RuleTier) -> RuleTier {
    RuleTier {
        class: tier.class,
        keywords: tier
            .keywords
            .into_iter()
            .map(|kw| kw.trim().to_uppercase())
            .filter(|kw| !kw.is_empty())
            .collect(),
    }
}

impl From<Vec<RuleTier>> for ClassifierRules {
    fn from(tiers: Vec<RuleTier>) -> Self {
        Self {
            tiers: tiers.into_iter().map(normalize_tier).collect(),
        }
    }
}

impl From<ClassifierRules> for Vec<RuleTier> {
    fn from(rules: ClassifierRules) -> Self {
        rules.tiers
    }
}
