/// Lowest grade a reviewer is expected to give.
pub const MIN_GRADE: i32 = 1;

/// Highest grade a reviewer is expected to give.
pub const MAX_GRADE: i32 = 5;

/// Grade counted as a "top grade" by the top-graded movie ranking.
pub const TOP_GRADE: i32 = MAX_GRADE;

/// Whether a grade lies in the expected 1-5 range.
///
/// Out-of-range grades are still legal input everywhere; this is only used for
/// presentation and warnings.
pub fn is_expected_grade(grade: i32) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&grade)
}
