//! Body-mass index calculator
//!
//! Produces the entry that the BMI history collection stores.

use crate::error::{Error, Result};
use crate::models::BmiEntry;

/// Accepted weight range, kilograms
pub const WEIGHT_RANGE_KG: std::ops::RangeInclusive<f64> = 10.0..=600.0;

/// Accepted height range, centimetres
pub const HEIGHT_RANGE_CM: std::ops::RangeInclusive<f64> = 50.0..=270.0;

/// Weight class for a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Colour tag the front end renders the value with
    pub fn color_tag(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "text-blue-500",
            BmiCategory::Normal => "text-emerald-500",
            BmiCategory::Overweight => "text-orange-500",
            BmiCategory::Obese => "text-rose-500",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed BMI, rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    /// Turn the result into a storable history entry
    pub fn into_entry(self, date: impl Into<String>) -> BmiEntry {
        BmiEntry {
            bmi: self.bmi,
            category: self.category.label().to_string(),
            color: self.category.color_tag().to_string(),
            date: date.into(),
        }
    }
}

/// Compute BMI from weight in kilograms and height in centimetres
pub fn calculate(weight_kg: f64, height_cm: f64) -> Result<BmiResult> {
    if !WEIGHT_RANGE_KG.contains(&weight_kg) {
        return Err(Error::InvalidInput(format!(
            "weight must be between {} and {} kg",
            WEIGHT_RANGE_KG.start(),
            WEIGHT_RANGE_KG.end()
        )));
    }
    if !HEIGHT_RANGE_CM.contains(&height_cm) {
        return Err(Error::InvalidInput(format!(
            "height must be between {} and {} cm",
            HEIGHT_RANGE_CM.start(),
            HEIGHT_RANGE_CM.end()
        )));
    }

    let height_m = height_cm / 100.0;
    let bmi = (weight_kg / (height_m * height_m) * 10.0).round() / 10.0;

    Ok(BmiResult {
        bmi,
        category: BmiCategory::from_bmi(bmi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_normal() {
        let result = calculate(70.0, 175.0).unwrap();
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_out_of_range_inputs() {
        assert!(matches!(calculate(5.0, 170.0), Err(Error::InvalidInput(_))));
        assert!(matches!(calculate(70.0, 300.0), Err(Error::InvalidInput(_))));
        assert!(matches!(calculate(f64::NAN, 170.0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_into_entry() {
        let entry = calculate(120.0, 170.0).unwrap().into_entry("10/18/2026");
        assert_eq!(entry.category, "Obese");
        assert_eq!(entry.color, "text-rose-500");
        assert_eq!(entry.date, "10/18/2026");
        assert_eq!(entry.bmi, 41.5);
    }
}
