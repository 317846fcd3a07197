use std::fmt;

use starfall_engine::PopulationCounts;

/// Positional arguments, in order.
pub const ARG_NAMES: [&str; 4] = ["nebulaPointCount", "starCount", "planetCount", "asteroidCount"];

pub const USAGE: &str =
    "usage: space-screensaver <nebulaPointCount> <starCount> <planetCount> <asteroidCount>";

/// Bad command line. Reported before any window or scene exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Not exactly four arguments.
    WrongCount(usize),
    /// Argument `position` (1-based) is not a non-negative integer that fits in 32 bits.
    InvalidNumber {
        position: usize,
        name: &'static str,
        text: String,
    },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::WrongCount(n) => {
                write!(f, "expected exactly 4 arguments, got {}\n{}", n, USAGE)
            }
            UsageError::InvalidNumber { position, name, text } => {
                write!(f, "argument {} <{}> ('{}') is not a valid number", position, name, text)
            }
        }
    }
}

impl std::error::Error for UsageError {}

/// Parse the four population counts. `args` excludes the program name.
pub fn parse_counts<I, S>(args: I) -> Result<PopulationCounts, UsageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    if args.len() != ARG_NAMES.len() {
        return Err(UsageError::WrongCount(args.len()));
    }

    let mut values = [0u32; 4];
    for (i, arg) in args.iter().enumerate() {
        values[i] = parse_count(arg.as_ref()).ok_or_else(|| UsageError::InvalidNumber {
            position: i + 1,
            name: ARG_NAMES[i],
            text: arg.as_ref().to_string(),
        })?;
    }
    let [nebula, stars, bodies, debris] = values;
    Ok(PopulationCounts::new(nebula, stars, bodies, debris))
}

/// ASCII digits only: no sign, no whitespace, not empty.
fn parse_count(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_counts_in_order() {
        let counts = parse_counts(["300", "100", "5", "20"]).unwrap();
        assert_eq!(counts, PopulationCounts::new(300, 100, 5, 20));
    }

    #[test]
    fn zero_counts_are_valid() {
        let counts = parse_counts(["0", "0", "0", "0"]).unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn leading_zeros_are_digits() {
        assert_eq!(parse_counts(["007", "0", "0", "0"]).unwrap().nebula, 7);
    }

    #[test]
    fn wrong_count() {
        assert_eq!(parse_counts(["1", "2", "3"]), Err(UsageError::WrongCount(3)));
        assert_eq!(parse_counts(Vec::<String>::new()), Err(UsageError::WrongCount(0)));
        assert_eq!(parse_counts(["1", "2", "3", "4", "5"]), Err(UsageError::WrongCount(5)));
    }

    #[test]
    fn rejects_non_digits() {
        for bad in ["", "-1", "+1", "1.5", " 1", "abc", "1e3"] {
            let err = parse_counts(["1", bad, "1", "1"]).unwrap_err();
            assert_eq!(
                err,
                UsageError::InvalidNumber {
                    position: 2,
                    name: "starCount",
                    text: bad.to_string()
                },
                "input {:?}",
                bad
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_counts(["4294967295", "0", "0", "0"]).is_ok());
        let err = parse_counts(["0", "0", "0", "4294967296"]).unwrap_err();
        assert!(matches!(err, UsageError::InvalidNumber { position: 4, .. }));
    }

    #[test]
    fn first_bad_argument_is_reported() {
        let err = parse_counts(["x", "y", "1", "1"]).unwrap_err();
        assert!(matches!(err, UsageError::InvalidNumber { position: 1, .. }));
        assert_eq!(err.to_string(), "argument 1 <nebulaPointCount> ('x') is not a valid number");
    }
}
