use std::{fmt::Display, str::FromStr};

/// Wrapper type to parse sizes with optional suffixes (e.g. 512, 4K, 1MiB).
#[derive(Debug, Clone, Copy)]
pub struct SizeArg(pub u64);

impl std::str::FromStr for SizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, multiplier) = parse_with_suffix(&lower);
        let num: u64 = num_str
            .parse()
            .map_err(|_| format!("Invalid size number: {num_str}"))?;
        num.checked_mul(multiplier)
            .map(Self)
            .ok_or_else(|| format!("Size too large: {s}"))
    }
}

fn parse_with_suffix(s: &str) -> (&str, u64) {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const SUFFIXES: &[(&[&str], u64)] = &[(&["mib", "mb", "m"], MB), (&["kib", "kb", "k"], KB)];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}

fn parse_at_least<T>(s: &str, min: T) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_at_least(s, 1)
}

/// Parse a field delimiter: exactly one ASCII character that is not a line break.
///
/// `\t` is accepted as an escape for a tab.
///
/// # Errors
/// Returns an error for empty, multi-character, non-ASCII, or line-break input.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    let s = if s == "\\t" { "\t" } else { s };
    match s.as_bytes() {
        [b'\n' | b'\r'] => Err("delimiter cannot be a line break".to_string()),
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got '{s}'")),
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Test that plain numeric values parse correctly without suffix
        #[test]
        fn test_size_arg_no_suffix(n in 0u64..1_000_000_000) {
            let parsed: SizeArg = format!("{n}").parse().unwrap();
            prop_assert_eq!(parsed.0, n);
        }

        /// Test that K suffix correctly multiplies by 1024
        #[test]
        fn test_size_arg_k_suffix(n in 0u64..1_000_000) {
            let parsed: SizeArg = format!("{n}K").parse().unwrap();
            prop_assert_eq!(parsed.0, n * 1024);
        }

        /// Every printable ASCII character except line breaks is a valid delimiter
        #[test]
        fn test_any_printable_ascii_delimiter(c in 0x20u8..0x7f) {
            let s = char::from(c).to_string();
            prop_assert_eq!(parse_delimiter(&s), Ok(c));
        }
    }
}
