/// Field normalization: uppercased labels, route codes and chart buckets.
use super::classifier::ClassifierRules;
use crate::model::{DerivedFields, RawRecord};
use compact_str::CompactString;

/// Number of leading SRE characters that name the route.
pub const ROUTE_PREFIX_LEN: usize = 3;

/// Route code: the first [`ROUTE_PREFIX_LEN`] characters of the uppercased
/// identifier. Shorter identifiers yield the whole (shorter) prefix.
pub fn route_code(identifier: &str) -> CompactString {
    identifier
        .to_uppercase()
        .chars()
        .take(ROUTE_PREFIX_LEN)
        .collect()
}

/// Collapse a label into a chart bucket key: uppercase, then drop every
/// character that is not an ASCII letter or digit.
///
/// Accented letters are removed, not transliterated ("ESPAÇOS" → "ESPAOS").
pub fn normalize_label(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Compute every derived field of a record.
pub fn derive_fields(raw: &RawRecord, rules: &ClassifierRules) -> DerivedFields {
    let identifier = raw.identifier.to_uppercase();
    let route = identifier.chars().take(ROUTE_PREFIX_LEN).collect();
    DerivedFields {
        identifier,
        route,
        lane: raw.lane.to_uppercase(),
        sign_type: raw.sign_type.to_uppercase(),
        classification: rules.classify(&raw.condition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::fixtures;
    use crate::model::ConditionClass;

    // ── normalize_label ──────────────────────────────────────────────────

    #[test]
    fn normalize_label_strips_non_alphanumerics() {
        assert_eq!(
            normalize_label("Texto Com Caracteres Especiais!"),
            "TEXTOCOMCARACTERESESPECIAIS"
        );
        assert_eq!(normalize_label("Texto com 123"), "TEXTOCOM123");
        assert_eq!(normalize_label("CARRO"), "CARRO");
    }

    /// Accented characters are dropped entirely.
    #[test]
    fn normalize_label_drops_diacritics() {
        assert_eq!(normalize_label("Espaços   Extras"), "ESPAOSEXTRAS");
        assert_eq!(normalize_label("Regulamentação"), "REGULAMENTAO");
    }

    #[test]
    fn normalize_label_is_idempotent() {
        for text in [
            "Placa de Advertência",
            "  a-b_c ",
            "ÁÉÍÓÚ çãõ",
            "",
            "123 xyz !?",
            "straße",
        ] {
            let once = normalize_label(text);
            assert_eq!(normalize_label(&once), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn normalize_label_collapses_visual_variants() {
        assert_eq!(normalize_label("Placa A-1"), normalize_label("placa a1"));
    }

    // ── route_code ───────────────────────────────────────────────────────

    #[test]
    fn route_code_takes_three_uppercased_chars() {
        assert_eq!(route_code("go060km12"), "GO0");
        assert_eq!(route_code("BR-153"), "BR-");
    }

    /// Identifiers shorter than the prefix yield what is available.
    #[test]
    fn route_code_short_identifiers() {
        assert_eq!(route_code("go"), "GO");
        assert_eq!(route_code("a"), "A");
        assert_eq!(route_code(""), "");
    }

    #[test]
    fn route_code_counts_characters_not_bytes() {
        assert_eq!(route_code("ção1"), "ÇÃO");
    }

    // ── derive_fields ────────────────────────────────────────────────────

    #[test]
    fn derive_fields_uppercases_and_classifies() {
        let mut raw = fixtures::vertical("go070 seg 3", "ruim");
        raw.lane = "esquerda".into();
        raw.sign_type = "Placa R-1".into();
        let derived = derive_fields(&raw, &ClassifierRules::default());

        assert_eq!(derived.identifier, "GO070 SEG 3");
        assert_eq!(derived.route, "GO0");
        assert_eq!(derived.lane, "ESQUERDA");
        assert_eq!(derived.sign_type, "PLACA R-1");
        assert_eq!(derived.classification, ConditionClass::Bad);
    }

    #[test]
    fn derive_fields_route_matches_route_code() {
        let raw = fixtures::horizontal("br0", "boa");
        let derived = derive_fields(&raw, &ClassifierRules::default());
        assert_eq!(derived.route, route_code(&raw.identifier));
    }
}
