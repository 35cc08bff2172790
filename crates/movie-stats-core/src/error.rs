use thiserror::Error;

pub type StatsResult<T> = Result<T, StatsError>;

/// Errors surfaced by the aggregation engine.
///
/// Both are caller mistakes. Queries that simply match nothing return zero or
/// an empty ranking instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// The service was built without a review source
    #[error("Missing repository")]
    MissingRepository,

    /// A ranking was asked for fewer than one entry
    #[error("amount must be 1 or bigger")]
    InvalidAmount { amount: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(StatsError::MissingRepository.to_string(), "Missing repository");
        assert_eq!(
            StatsError::InvalidAmount { amount: -1 }.to_string(),
            "amount must be 1 or bigger"
        );
    }
}
