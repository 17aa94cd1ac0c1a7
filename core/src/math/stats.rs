use serde::{Deserialize, Serialize};

pub struct StatsHelper;

/// Min / max / mean of a set of payload masses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadSummary {
    pub count: usize,
    pub min_kg: f64,
    pub max_kg: f64,
    pub mean_kg: f64,
}

impl StatsHelper {
    /// Share of the total for each value; all zeros when the total is zero.
    pub fn fractions(values: &[f64]) -> Vec<f64> {
        let total: f64 = values.iter().sum();
        if total <= 0.0 {
            return vec![0.0; values.len()];
        }
        values.iter().map(|&v| v / total).collect()
    }

    pub fn payload_summary(masses: &[f64]) -> Option<PayloadSummary> {
        if masses.is_empty() {
            return None;
        }
        let min_kg = masses.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_kg = masses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean_kg = masses.iter().sum::<f64>() / masses.len() as f64;
        Some(PayloadSummary {
            count: masses.len(),
            min_kg,
            max_kg,
            mean_kg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_of_zero_total_are_zero() {
        assert_eq!(StatsHelper::fractions(&[]), Vec::<f64>::new());
        assert_eq!(StatsHelper::fractions(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn fractions_sum_to_one() {
        let fractions = StatsHelper::fractions(&[1.0, 3.0]);
        assert_eq!(fractions, vec![0.25, 0.75]);
    }

    #[test]
    fn payload_summary_handles_single_value() {
        let summary = StatsHelper::payload_summary(&[4000.0]).unwrap();
        assert_eq!(summary.min_kg, 4000.0);
        assert_eq!(summary.max_kg, 4000.0);
        assert_eq!(summary.mean_kg, 4000.0);
        assert!(StatsHelper::payload_summary(&[]).is_none());
    }
}
