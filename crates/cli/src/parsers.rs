// crates/cli/src/parsers.rs

/// Wrapper type to parse populations with optional magnitude suffixes
/// (e.g. 500k, 12.5m, 1b).
#[derive(Debug, Clone, Copy)]
pub struct PopArg(pub u64);

impl std::str::FromStr for PopArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().replace('_', "").to_ascii_lowercase();
        let (num_str, multiplier) = parse_with_suffix(&cleaned);
        let num: f64 = num_str
            .trim()
            .parse()
            .map_err(|_| format!("Invalid population number: {num_str}"))?;
        if !num.is_finite() || num < 0.0 {
            return Err(format!("Population must be a non-negative number: {s}"));
        }
        Ok(Self((num * multiplier as f64).round() as u64))
    }
}

fn parse_with_suffix(s: &str) -> (&str, u64) {
    const SUFFIXES: &[(&str, u64)] = &[
        ("b", 1_000_000_000),
        ("m", 1_000_000),
        ("k", 1_000),
    ];
    for (suffix, multiplier) in SUFFIXES {
        if let Some(stripped) = s.strip_suffix(suffix) {
            return (stripped.trim(), *multiplier);
        }
    }
    (s, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!("31889923".parse::<PopArg>().unwrap().0, 31_889_923);
        assert_eq!("0".parse::<PopArg>().unwrap().0, 0);
    }

    #[test]
    fn parses_magnitude_suffixes() {
        assert_eq!("500k".parse::<PopArg>().unwrap().0, 500_000);
        assert_eq!("12.5m".parse::<PopArg>().unwrap().0, 12_500_000);
        assert_eq!("1b".parse::<PopArg>().unwrap().0, 1_000_000_000);
        assert_eq!("1.5B".parse::<PopArg>().unwrap().0, 1_500_000_000);
    }

    #[test]
    fn allows_underscore_grouping() {
        assert_eq!("1_000_000".parse::<PopArg>().unwrap().0, 1_000_000);
    }

    #[test]
    fn rejects_garbage_and_negatives() {
        assert!("many".parse::<PopArg>().is_err());
        assert!("-5".parse::<PopArg>().is_err());
        assert!("".parse::<PopArg>().is_err());
    }
}
