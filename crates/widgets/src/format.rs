/// Binary magnitude prefixes, smallest first.  Each step is a factor of 1024.
const SYMBOLS: [char; 8] = ['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y'];

/// Compact byte count: the largest prefix the value reaches, truncated.
///
/// `10000` → `"9K"`, `100001221` → `"95M"`, anything below 1024 → `"<n>B"`.
pub fn bytes2human(n: u64) -> String {
    let n = u128::from(n);
    for (i, symbol) in SYMBOLS.iter().enumerate().rev() {
        let threshold = 1u128 << ((i + 1) * 10);
        if n >= threshold {
            return format!("{}{symbol}", n / threshold);
        }
    }
    format!("{n}B")
}

/// Fixed-width percentage / temperature figure, e.g. `" 42.0"`.
pub fn format_percent(percent: f32) -> String {
    format!("{percent:5.1}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bytes2human_known_values() {
        assert_eq!(bytes2human(10_000), "9K");
        assert_eq!(bytes2human(100_001_221), "95M");
        assert_eq!(bytes2human(0), "0B");
        assert_eq!(bytes2human(1_023), "1023B");
        assert_eq!(bytes2human(1_024), "1K");
        assert_eq!(bytes2human(1 << 30), "1G");
        assert_eq!(bytes2human(u64::MAX), "15E");
    }

    #[test]
    fn format_percent_pads_to_five() {
        assert_eq!(format_percent(5.0), "  5.0");
        assert_eq!(format_percent(42.04), " 42.0");
        assert_eq!(format_percent(100.0), "100.0");
    }

    fn threshold(unit: char) -> u128 {
        match SYMBOLS.iter().position(|s| *s == unit) {
            Some(i) => 1u128 << ((i + 1) * 10),
            None => 1,
        }
    }

    proptest! {
        #[test]
        fn bytes2human_picks_the_tight_threshold(n in any::<u64>()) {
            let text = bytes2human(n);
            let unit = text.chars().last().unwrap();
            let value: u128 = text[..text.len() - 1].parse().unwrap();
            let step = threshold(unit);
            let n = u128::from(n);

            prop_assert!(value * step <= n);
            prop_assert!((value + 1) * step > n);
            prop_assert!(step * 1024 > n);
        }
    }
}
