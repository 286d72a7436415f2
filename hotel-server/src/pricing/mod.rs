//! Booking Pricing
//!
//! Nightly-rate totals with precise decimal arithmetic. Calculations
//! run on `Decimal` internally and convert to `f64` for
//! storage/serialization.

use chrono::NaiveDate;
use rust_decimal::prelude::*;

use shared::models::BookingTotal;

/// Rounding for monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Number of nights in a stay, rounding partial days up
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    let span = check_out.signed_duration_since(check_in);
    let secs = span.num_seconds();
    // `i64::div_ceil` is unstable; this is its expansion for a positive divisor.
    let days = secs / 86_400;
    if secs % 86_400 > 0 { days + 1 } else { days }
}

/// Total for a stay: nights × nightly price, rounded to 2 decimals
///
/// Non-positive stays total zero; callers that require a valid date
/// range must validate ordering before pricing.
pub fn booking_total(nightly_price: f64, check_in: NaiveDate, check_out: NaiveDate) -> f64 {
    let nights = nights_between(check_in, check_out);
    if nights <= 0 {
        return 0.0;
    }
    to_f64(to_decimal(nightly_price) * Decimal::from(nights))
}

/// Provisional quote while the booking form is incomplete
///
/// An absent price or date quotes to zero rather than failing, so the
/// caller can always show a running total.
pub fn quote(
    nightly_price: Option<f64>,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> BookingTotal {
    match (nightly_price, check_in, check_out) {
        (Some(price), Some(check_in), Some(check_out)) => BookingTotal {
            nights: nights_between(check_in, check_out).max(0),
            total: booking_total(price, check_in, check_out),
        },
        _ => BookingTotal {
            nights: 0,
            total: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_three_nights_at_200() {
        let total = booking_total(200.0, date(2024, 1, 1), date(2024, 1, 4));
        assert_eq!(total, 600.0);
        assert_eq!(nights_between(date(2024, 1, 1), date(2024, 1, 4)), 3);
    }

    #[test]
    fn test_single_night() {
        assert_eq!(booking_total(450.0, date(2024, 1, 1), date(2024, 1, 2)), 450.0);
    }

    #[test]
    fn test_rounding_to_cents() {
        // Decimal arithmetic keeps float noise out of stored totals
        assert_eq!(booking_total(109.99, date(2024, 1, 1), date(2024, 1, 4)), 329.97);
        // 3 x 12.345 lands above the cent boundary and rounds up
        assert_eq!(booking_total(12.345, date(2024, 1, 1), date(2024, 1, 4)), 37.04);
    }

    #[test]
    fn test_non_positive_span_totals_zero() {
        assert_eq!(booking_total(200.0, date(2024, 1, 4), date(2024, 1, 1)), 0.0);
        assert_eq!(booking_total(200.0, date(2024, 1, 1), date(2024, 1, 1)), 0.0);
    }

    #[test]
    fn test_quote_zero_when_incomplete() {
        let zero = BookingTotal {
            nights: 0,
            total: 0.0,
        };
        assert_eq!(quote(None, Some(date(2024, 1, 1)), Some(date(2024, 1, 4))), zero);
        assert_eq!(quote(Some(200.0), None, Some(date(2024, 1, 4))), zero);
        assert_eq!(quote(Some(200.0), Some(date(2024, 1, 1)), None), zero);
    }

    #[test]
    fn test_quote_complete() {
        let quoted = quote(Some(200.0), Some(date(2024, 1, 1)), Some(date(2024, 1, 4)));
        assert_eq!(quoted.nights, 3);
        assert_eq!(quoted.total, 600.0);
    }
}
