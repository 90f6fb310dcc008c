//! Shared column conversion helpers.
//!
//! Money and timestamps are stored as TEXT (decimal string, RFC 3339).
//! Reads are tolerant: a damaged cell is logged and replaced with a safe
//! default instead of poisoning the whole query.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a stored decimal string, falling back through f64 for values that
/// ended up in scientific notation.
pub fn parse_decimal(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str).ok().and_then(Decimal::from_f64) {
            Some(dec_val) => dec_val,
            None => {
                log::error!(
                    "Failed to parse {} '{}' as Decimal ({}). Falling back to ZERO.",
                    field_name,
                    value_str,
                    e_decimal
                );
                Decimal::ZERO
            }
        },
    }
}

/// Parse a stored RFC 3339 timestamp. A damaged cell reads as now, which at
/// least keeps ordering stable for rows written afterwards.
pub fn parse_timestamp(value_str: &str, field_name: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value_str) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            log::error!(
                "Failed to parse {} '{}' as RFC 3339 timestamp ({}).",
                field_name,
                value_str,
                e
            );
            Utc::now()
        }
    }
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_plain_and_scientific() {
        assert_eq!(parse_decimal("1234.56", "amount"), dec!(1234.56));
        assert_eq!(parse_decimal("1.5e3", "amount"), dec!(1500));
        assert_eq!(parse_decimal("garbage", "amount"), Decimal::ZERO);
    }

    #[test]
    fn test_timestamp_round_trip() {
        let now = Utc::now();
        let parsed = parse_timestamp(&format_timestamp(&now), "created_at");
        assert_eq!(parsed, now);
    }
}
