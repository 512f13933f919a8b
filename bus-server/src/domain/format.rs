//! Display formatting for fare and time cells.
//!
//! Both transforms run once per record at load time, so the table only ever
//! holds display-ready strings.

/// Format a decimal time-of-day cell as `HH:MM`.
///
/// The integer part is the hour. The minutes are the first two decimal
/// digits of the fraction, so `7.5` reads as `07:50` rather than half past
/// seven. Timetables in the source data are entered in this encoding.
///
/// Missing or non-finite values produce an empty string.
///
/// ```
/// use bus_server::domain::format_time;
///
/// assert_eq!(format_time(Some(7.5)), "07:50");
/// assert_eq!(format_time(Some(13.05)), "13:05");
/// assert_eq!(format_time(None), "");
/// ```
pub fn format_time(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };

    let hours = v.trunc() as i64;
    let minutes = (v * 100.0).rem_euclid(100.0).trunc() as i64;

    format!("{hours:02}:{minutes:02}")
}

/// Format a fare as a whole number with `,` thousands separators.
///
/// Fractional fares are rounded half-to-even. Missing or non-finite values
/// produce an empty string.
///
/// ```
/// use bus_server::domain::format_fare;
///
/// assert_eq!(format_fare(Some(12345.0)), "12,345");
/// assert_eq!(format_fare(Some(0.0)), "0");
/// assert_eq!(format_fare(None), "");
/// ```
pub fn format_fare(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return String::new();
    };

    let rounded = v.round_ties_even();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    // Fares that round to zero print without a sign: -0.4 is "0", never "-0".
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
