//! Route number type.

use std::fmt;

/// Error returned when a value cannot be used as a route number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route number: {reason}")]
pub struct InvalidRouteNo {
    reason: &'static str,
}

const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A bus route number.
///
/// Spreadsheet cells hold route numbers as floating point values, so
/// [`RouteNo::from_numeric`] truncates toward zero the way an integer cast
/// would. Any sign is kept. URL paths only carry unsigned digits, so
/// [`RouteNo::parse`] never yields a negative route.
///
/// # Examples
///
/// ```
/// use bus_server::domain::RouteNo;
///
/// let route = RouteNo::parse("42").unwrap();
/// assert_eq!(route.get(), 42);
///
/// // Fractional cell values are truncated
/// assert_eq!(RouteNo::from_numeric(7.9).unwrap(), RouteNo::new(7));
///
/// // Negative cell values are kept, but not in a path
/// assert_eq!(RouteNo::from_numeric(-3.0).unwrap().get(), -3);
/// assert!(RouteNo::parse("-3").is_err());
/// assert!(RouteNo::parse("12A").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct RouteNo(i64);

impl RouteNo {
    /// Wrap a known-good route number.
    pub const fn new(n: i64) -> Self {
        RouteNo(n)
    }

    /// Coerce a numeric cell value into a route number.
    pub fn from_numeric(value: f64) -> Result<Self, InvalidRouteNo> {
        if !value.is_finite() {
            return Err(InvalidRouteNo {
                reason: "must be a finite number",
            });
        }

        // i64 spans [-2^63, 2^63); both bounds are exact in f64.
        let truncated = value.trunc();
        if !(-I64_BOUND..I64_BOUND).contains(&truncated) {
            return Err(InvalidRouteNo {
                reason: "out of range",
            });
        }

        Ok(RouteNo(truncated as i64))
    }

    /// Parse a route number from decimal digits, as found in a URL path.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteNo> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidRouteNo {
                reason: "must be decimal digits",
            });
        }

        s.parse::<i64>().map(RouteNo).map_err(|_| InvalidRouteNo {
            reason: "out of range",
        })
    }

    /// Returns the numeric value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for RouteNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteNo({})", self.0)
    }
}

impl fmt::Display for RouteNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display then parse returns the same route
        #[test]
        fn display_parse_roundtrip(n in 0..=i64::MAX) {
            let route = RouteNo::new(n);
            prop_assert_eq!(RouteNo::parse(&route.to_string()).unwrap(), route);
        }

        /// Any integral value exactly representable in f64 is accepted unchanged
        #[test]
        fn integral_values_accepted(n in -(1i64 << 53)..=(1i64 << 53)) {
            prop_assert_eq!(RouteNo::from_numeric(n as f64).unwrap().get(), n);
        }

        /// Strings containing a non-digit are rejected
        #[test]
        fn non_digits_rejected(s in "[0-9]{0,3}[a-zA-Z .-][0-9]{0,3}") {
            prop_assert!(RouteNo::parse(&s).is_err());
        }
    }
}
