//! Номера документов вида `PREFIX-NNNN`

const NUMBER_WIDTH: usize = 4;

fn parse_sequence(prefix: &str, number: &str) -> Option<u64> {
    number
        .strip_prefix(prefix)?
        .strip_prefix('-')?
        .parse::<u64>()
        .ok()
}

pub fn format_number(prefix: &str, sequence: u64) -> String {
    format!("{}-{:0width$}", prefix, sequence, width = NUMBER_WIDTH)
}

/// Next number after the largest existing `PREFIX-N`; foreign formats are ignored
pub fn next_number<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let last = existing
        .into_iter()
        .filter_map(|number| parse_sequence(prefix, number))
        .max()
        .unwrap_or(0);
    format_number(prefix, last + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_number_starts_at_one() {
        assert_eq!(next_number("INV", []), "INV-0001");
    }

    #[test]
    fn test_next_number_follows_the_largest() {
        let existing = ["INV-0002", "INV-0010", "INV-0007"];
        assert_eq!(next_number("INV", existing), "INV-0011");
    }

    #[test]
    fn test_next_number_ignores_other_formats() {
        let existing = ["INVX-0099", "QT-0050", "INV-abc", "legacy", "INV-0003"];
        assert_eq!(next_number("INV", existing), "INV-0004");
    }

    #[test]
    fn test_wide_numbers_are_not_truncated() {
        assert_eq!(next_number("PO", ["PO-12345"]), "PO-12346");
    }
}
