pub mod average;
pub mod grade;
pub mod review;

pub use average::AveragePolicy;
pub use grade::{is_expected_grade, MAX_GRADE, MIN_GRADE, TOP_GRADE};
pub use review::Review;
