use serde::{Deserialize, Serialize};

/// How a mean grade is computed from a sum and a count.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AveragePolicy {
    /// Floating-point mean
    #[default]
    Exact,
    /// Integer division, truncating toward zero (mean of 1 and 2 is 1)
    Truncated,
}

impl AveragePolicy {
    /// Mean of `sum` over `count` items; 0 when there are no items.
    pub fn mean(self, sum: i64, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        match self {
            AveragePolicy::Exact => sum as f64 / count as f64,
            AveragePolicy::Truncated => (sum / count as i64) as f64,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AveragePolicy::Exact => "exact",
            AveragePolicy::Truncated => "truncated",
        }
    }
}

impl std::str::FromStr for AveragePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(AveragePolicy::Exact),
            "truncated" | "integer" => Ok(AveragePolicy::Truncated),
            _ => Err(format!("Invalid average policy: {}. Use 'exact' or 'truncated'", s)),
        }
    }
}
