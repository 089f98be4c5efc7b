//! Salary - Display formatting for upstream salary ranges
//!
//! Amounts are rendered Indian style: lakhs (`L`) from 1,00,000,
//! thousands (`K`) from 1,000, raw rupees below that.

use std::fmt;

const CURRENCY: &str = "₹";
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Text shown when neither bound is usable.
pub const SALARY_NOT_SPECIFIED: &str = "Not specified";

/// A salary range where either bound may be unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl SalaryRange {
    /// Zero, negative and non-finite bounds are dropped.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.filter(|v| is_usable(*v)),
            max: max.filter(|v| is_usable(*v)),
        }
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn is_specified(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

fn is_usable(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

impl fmt::Display for SalaryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => {
                write!(f, "{} - {}", format_amount(min), format_amount(max))
            }
            (Some(min), None) => write!(f, "{}+", format_amount(min)),
            (None, Some(max)) => write!(f, "Up to {}", format_amount(max)),
            (None, None) => f.write_str(SALARY_NOT_SPECIFIED),
        }
    }
}

/// Format an optional salary range for display.
pub fn format_salary(min: Option<f64>, max: Option<f64>) -> String {
    SalaryRange::new(min, max).to_string()
}

// Rounding is half away from zero, so 2,500 renders as ₹3K.
fn format_amount(amount: f64) -> String {
    if amount >= LAKH {
        let lakhs = (amount / LAKH * 10.0).round() / 10.0;
        format!("{CURRENCY}{lakhs:.1}L")
    } else if amount >= THOUSAND {
        format!("{CURRENCY}{:.0}K", (amount / THOUSAND).round())
    } else {
        format!("{CURRENCY}{:.0}", amount.round())
    }
}
