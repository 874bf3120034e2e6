pub fn normalize_input(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

// trunk prefix
pub fn strip_trunk_prefix(value: &str) -> &str {
    value.strip_prefix('0').unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::{normalize_input, strip_non_digits, strip_trunk_prefix};

    #[test]
    fn normalize_input_trims() {
        assert_eq!(normalize_input(Some("  (11) 3456-7890 \t")), "(11) 3456-7890");
    }

    #[test]
    fn normalize_input_treats_absent_as_empty() {
        assert_eq!(normalize_input(None), "");
        assert_eq!(normalize_input(Some("   ")), "");
    }

    #[test]
    fn normalize_input_keeps_inner_characters() {
        assert_eq!(normalize_input(Some(" a b-c ")), "a b-c");
    }

    #[test]
    fn strip_non_digits_keeps_ascii_digits_only() {
        assert_eq!(strip_non_digits("(011) 9 8765-4321"), "011987654321");
        assert_eq!(strip_non_digits("١٢٣"), "");
    }

    #[test]
    fn strip_trunk_prefix_removes_one_zero() {
        assert_eq!(strip_trunk_prefix("0011"), "011");
        assert_eq!(strip_trunk_prefix("11"), "11");
        assert_eq!(strip_trunk_prefix(""), "");
    }
}
