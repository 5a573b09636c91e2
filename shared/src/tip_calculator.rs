use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::INVALID_BILL_ERROR;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipBreakdown {
    pub tip_amount: f64,
    pub total_with_tip: f64,
    pub per_person_tip: f64,
    pub per_person_total: f64,
    pub people: u32,
    /// Party size was missing or below one and fell back to a single person.
    pub people_defaulted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipError {
    InvalidBill,
}

impl fmt::Display for TipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBill => write!(f, "{}", INVALID_BILL_ERROR),
        }
    }
}

impl std::error::Error for TipError {}

pub fn calculate(bill: f64, people: i64, tip_percent: Option<f64>) -> Result<TipBreakdown, TipError> {
    if !bill.is_finite() || bill <= 0.0 {
        return Err(TipError::InvalidBill);
    }

    let people_defaulted = people < 1;
    let people = if people_defaulted { 1 } else { people.min(u32::MAX as i64) as u32 };
    let tip_percent = tip_percent.filter(|p| p.is_finite()).unwrap_or(0.0);

    let tip_amount = bill * tip_percent / 100.0;
    let total_with_tip = bill + tip_amount;

    Ok(TipBreakdown {
        tip_amount,
        total_with_tip,
        per_person_tip: tip_amount / people as f64,
        per_person_total: total_with_tip / people as f64,
        people,
        people_defaulted,
    })
}

/// Lenient number parse for form fields: anything unreadable is zero.
pub fn parse_bill(input: &str) -> f64 {
    leading_number(input).unwrap_or(0.0)
}

/// Unreadable party size counts as one person.
pub fn parse_people(input: &str) -> i64 {
    leading_number(input)
        .map(|v| v.trunc() as i64)
        .filter(|&v| v != 0)
        .unwrap_or(1)
}

/// A custom tip of zero or garbage means no tip is selected.
pub fn parse_custom_tip(input: &str) -> Option<f64> {
    leading_number(input).filter(|&v| v != 0.0)
}

pub fn format_currency(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

// Longest numeric prefix, so "12.5abc" reads as 12.5 like a browser number field.
fn leading_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let end = trimmed
        .char_indices()
        .take_while(|&(i, c)| c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;
    let mut candidate = &trimmed[..end];
    while !candidate.is_empty() {
        if let Ok(v) = candidate.parse::<f64>() {
            return Some(v).filter(|v| v.is_finite());
        }
        candidate = &candidate[..candidate.len() - 1];
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let result = calculate(100.0, 4, Some(20.0)).unwrap();
        assert_eq!(result.tip_amount, 20.0);
        assert_eq!(result.total_with_tip, 120.0);
        assert_eq!(result.per_person_tip, 5.0);
        assert_eq!(result.per_person_total, 30.0);
        assert!(!result.people_defaulted);
    }

    #[test]
    fn test_non_positive_bill_rejected() {
        assert_eq!(calculate(0.0, 2, Some(15.0)), Err(TipError::InvalidBill));
        assert_eq!(calculate(-5.0, 2, Some(15.0)), Err(TipError::InvalidBill));
        assert_eq!(calculate(f64::NAN, 2, None), Err(TipError::InvalidBill));
    }

    #[test]
    fn test_party_size_defaults_to_one() {
        let result = calculate(50.0, 0, Some(10.0)).unwrap();
        assert_eq!(result.people, 1);
        assert!(result.people_defaulted);
        assert_eq!(result.per_person_total, 55.0);

        assert!(calculate(50.0, -3, None).unwrap().people_defaulted);
    }

    #[test]
    fn test_no_tip_selected() {
        let result = calculate(42.0, 2, None).unwrap();
        assert_eq!(result.tip_amount, 0.0);
        assert_eq!(result.per_person_total, 21.0);
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(parse_bill("12.5"), 12.5);
        assert_eq!(parse_bill(" 12.5abc"), 12.5);
        assert_eq!(parse_bill("abc"), 0.0);
        assert_eq!(parse_bill(""), 0.0);
        assert_eq!(parse_people("3"), 3);
        assert_eq!(parse_people("2.9"), 2);
        assert_eq!(parse_people(""), 1);
        assert_eq!(parse_people("-2"), -2);
        assert_eq!(parse_custom_tip("0"), None);
        assert_eq!(parse_custom_tip("x"), None);
        assert_eq!(parse_custom_tip("17.5"), Some(17.5));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(12.346), "$12.35");
        assert_eq!(format_currency(7.0), "$7.00");
    }
}
