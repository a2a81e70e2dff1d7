//! Currency amounts and rounding

/// Money in currency minor units
pub type Amount = i64;

/// Smallest increment every envelope amount is aligned to
pub const GRANULARITY: Amount = 1000;

/// Round to the nearest multiple of [`GRANULARITY`], halves rounding up.
pub fn round_to_granularity(x: Amount) -> Amount {
    (x + GRANULARITY / 2).div_euclid(GRANULARITY) * GRANULARITY
}

/// Number of whole granularity units in `x`, rounded down.
pub fn units(x: Amount) -> Amount {
    x.div_euclid(GRANULARITY)
}

/// Format an amount with `.` thousands separators, e.g. `1.250.000 VND`.
pub fn format_amount(x: Amount) -> String {
    let digits = x.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if x < 0 {
        grouped.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped.push_str(" VND");
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 0 ; "zero")]
    #[test_case(499, 0 ; "below half")]
    #[test_case(500, 1000 ; "half rounds up")]
    #[test_case(1499, 1000 ; "just below next half")]
    #[test_case(20_000, 20_000 ; "already aligned")]
    #[test_case(-400, 0 ; "small negative")]
    #[test_case(-1500, -1000 ; "negative half rounds up")]
    fn test_round_to_granularity(x: Amount, expected: Amount) {
        assert_eq!(round_to_granularity(x), expected);
    }

    #[test]
    fn test_units() {
        assert_eq!(units(0), 0);
        assert_eq!(units(999), 0);
        assert_eq!(units(250_000), 250);
    }

    #[test_case(0, "0 VND")]
    #[test_case(999, "999 VND")]
    #[test_case(1000, "1.000 VND")]
    #[test_case(1_250_000, "1.250.000 VND")]
    #[test_case(-50_000, "-50.000 VND")]
    fn test_format_amount(x: Amount, expected: &str) {
        assert_eq!(format_amount(x), expected);
    }
}
