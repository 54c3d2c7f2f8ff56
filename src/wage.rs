//! Statutory wage arithmetic
//!
//! Pure functions implementing the Employment Act 1955 formulas: the ordinary
//! rate of pay is the monthly wage over 26 working days (s.60I(1B)), the
//! hourly rate assumes an 8-hour day, and overtime is paid at 1.5 times the
//! hourly rate (s.60A(3)(a)). Each step of the arithmetic is reproduced as a
//! human-readable string for transparency.

use crate::error::{HakbotError, Result};
use serde::{Deserialize, Serialize};

/// Statutory working-day divisor for the ordinary rate of pay
pub const WORKING_DAYS_PER_MONTH: f64 = 26.0;
/// Normal hours of work per day
pub const HOURS_PER_DAY: f64 = 8.0;
/// Overtime multiplier on a normal working day
pub const OVERTIME_MULTIPLIER: f64 = 1.5;

/// Citation to the governing statute sections
pub const STATUTE_CITATION: &str = "Employment Act 1955, Sections 60I(1B) and 60A(3)(a)";

/// Ordered arithmetic steps plus the statute citation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageBreakdown {
    pub steps: Vec<String>,
    pub citation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_overtime_pay: Option<f64>,
}

/// Calculate daily/hourly/overtime rates for a monthly salary.
///
/// Rejects non-positive salaries and negative overtime hours with a
/// validation error; touches no external resource.
pub fn calculate(monthly_salary: f64, overtime_hours: f64) -> Result<WageBreakdown> {
    if !monthly_salary.is_finite() || monthly_salary <= 0.0 {
        return Err(HakbotError::Validation(format!(
            "monthly salary must be positive, got {}",
            monthly_salary
        )));
    }
    if !overtime_hours.is_finite() || overtime_hours < 0.0 {
        return Err(HakbotError::Validation(format!(
            "overtime hours must not be negative, got {}",
            overtime_hours
        )));
    }

    let daily_rate = monthly_salary / WORKING_DAYS_PER_MONTH;
    let hourly_rate = daily_rate / HOURS_PER_DAY;
    let overtime_rate = hourly_rate * OVERTIME_MULTIPLIER;

    let mut steps = vec![
        format!(
            "Daily rate: RM{:.2} / {} working days = RM{:.2}",
            monthly_salary, WORKING_DAYS_PER_MONTH as u32, daily_rate
        ),
        format!(
            "Hourly rate: RM{:.2} / {} hours = RM{:.2}",
            daily_rate, HOURS_PER_DAY as u32, hourly_rate
        ),
        format!(
            "Overtime rate: RM{:.2} x {} = RM{:.2}",
            hourly_rate, OVERTIME_MULTIPLIER, overtime_rate
        ),
    ];

    let total_overtime_pay = if overtime_hours > 0.0 {
        let total = overtime_rate * overtime_hours;
        steps.push(format!(
            "Overtime pay: RM{:.2} x {} hours = RM{:.2}",
            overtime_rate, overtime_hours, total
        ));
        Some(total)
    } else {
        None
    };

    Ok(WageBreakdown {
        steps,
        citation: STATUTE_CITATION.to_string(),
        total_overtime_pay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_statutory_example() {
        let breakdown = calculate(1700.0, 10.0).unwrap();

        assert_eq!(breakdown.steps.len(), 4);
        assert_eq!(
            breakdown.steps[0],
            "Daily rate: RM1700.00 / 26 working days = RM65.38"
        );
        assert_eq!(
            breakdown.steps[1],
            "Hourly rate: RM65.38 / 8 hours = RM8.17"
        );
        assert_eq!(breakdown.steps[2], "Overtime rate: RM8.17 x 1.5 = RM12.26");
        assert_eq!(
            breakdown.steps[3],
            "Overtime pay: RM12.26 x 10 hours = RM122.60"
        );

        assert_relative_eq!(
            breakdown.total_overtime_pay.unwrap(),
            122.60,
            epsilon = 0.01
        );
        assert_eq!(breakdown.citation, STATUTE_CITATION);
    }

    #[test]
    fn test_zero_overtime_omits_total() {
        let breakdown = calculate(2000.0, 0.0).unwrap();
        assert_eq!(breakdown.steps.len(), 3);
        assert!(breakdown.total_overtime_pay.is_none());
    }

    #[test]
    fn test_non_positive_salary_rejected() {
        for bad in [-5.0, 0.0, f64::NAN] {
            match calculate(bad, 0.0) {
                Err(HakbotError::Validation(_)) => (),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_negative_overtime_rejected() {
        match calculate(1000.0, -1.0) {
            Err(HakbotError::Validation(msg)) => {
                assert!(msg.contains("overtime"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_intermediate_values() {
        let breakdown = calculate(1700.0, 10.0).unwrap();
        // Full-precision total, not the rounded display values
        assert_relative_eq!(
            breakdown.total_overtime_pay.unwrap(),
            1700.0 / 26.0 / 8.0 * 1.5 * 10.0,
            epsilon = 1e-9
        );
    }
}
