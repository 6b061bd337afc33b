//! State input form
//!
//! Every field is taken as free text and read like a browser number input
//! would: the leading number is used and trailing text ignored. Text with no
//! leading number becomes NaN (or a `null` bin count) and is sent anyway;
//! the backend decides what to do with it.

use clap::Args;
use physrl_core::{DiscretizeRequest, StateVector};

#[derive(Args, Debug, Clone)]
pub struct StateForm {
    /// Cart position (range: -4.8 ~ 4.8)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub position: String,

    /// Cart velocity (range: -3.0 ~ 3.0)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub velocity: String,

    /// Pole angle in radians (range: -0.418 ~ 0.418, about ±24°)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub angle: String,

    /// Pole angular velocity (range: -3.0 ~ 3.0)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub angular_velocity: String,

    /// Bins per dimension (suggested: 2 ~ 100)
    #[arg(short, long, default_value = "20", allow_hyphen_values = true)]
    pub bins: String,
}

impl StateForm {
    pub fn state(&self) -> StateVector {
        StateVector::new(
            parse_field(&self.position),
            parse_field(&self.velocity),
            parse_field(&self.angle),
            parse_field(&self.angular_velocity),
        )
    }

    pub fn n_bins(&self) -> Option<i64> {
        parse_bins(&self.bins)
    }

    pub fn to_request(&self) -> DiscretizeRequest {
        DiscretizeRequest::new(self.state()).with_parsed_bins(self.n_bins())
    }
}

/// Byte length of an optional sign followed by ASCII digits
fn signed_digits_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    sign + bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Longest leading decimal literal: `[+-]digits[.digits][e[+-]digits]`
fn float_prefix(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = signed_digits_len(text);
    let mut has_digits = bytes[..end].iter().any(u8::is_ascii_digit);

    if bytes.get(end) == Some(&b'.') {
        let fraction = bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if has_digits || fraction > 0 {
            end += 1 + fraction;
            has_digits = true;
        }
    }
    if !has_digits {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent = signed_digits_len(&text[end + 1..]);
        if text[end + 1..end + 1 + exponent].bytes().any(|b| b.is_ascii_digit()) {
            end += 1 + exponent;
        }
    }

    &text[..end]
}

/// Parse a numeric field from its leading number, yielding NaN when there
/// is none
pub fn parse_field(text: &str) -> f64 {
    let text = text.trim_start();

    for (literal, value) in [
        ("Infinity", f64::INFINITY),
        ("+Infinity", f64::INFINITY),
        ("-Infinity", f64::NEG_INFINITY),
    ] {
        if text.starts_with(literal) {
            return value;
        }
    }

    float_prefix(text).parse().unwrap_or(f64::NAN)
}

/// Parse a bin count from its leading integer, yielding `None` when there
/// is none. No range is enforced.
pub fn parse_bins(text: &str) -> Option<i64> {
    let text = text.trim_start();
    text[..signed_digits_len(text)].parse().ok()
}
