/// Number formatting for dashboard text.

/// Format a record count with `.` thousand separators (pt-BR style).
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format a 0.0–1.0 share as a percentage with one decimal and a comma.
pub fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0).replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.000");
        assert_eq!(format_count(1_234_567), "1.234.567");
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(0.0), "0,0%");
        assert_eq!(format_share(0.5), "50,0%");
        assert_eq!(format_share(1.0 / 3.0), "33,3%");
    }
}
