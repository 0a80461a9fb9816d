pub(crate) fn normalize_text(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_case() {
        assert_eq!(
            normalize_text("  Casual\t outfit\n for   BRUNCH "),
            "casual outfit for brunch"
        );
        assert_eq!(normalize_text(""), "");
    }
}
