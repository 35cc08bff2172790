// Serializable bundles of related statistics, used for display and JSON output

use crate::distribution::GradeDistribution;
use crate::error::StatsResult;
use crate::service::ReviewService;
use movie_stats_models::AveragePolicy;
use movie_stats_sources::ReviewSource;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewerReport {
    pub reviewer: i32,
    pub review_count: usize,
    pub average_grade: f64,
    pub grades: GradeDistribution,
    pub movies_newest_first: Vec<i32>,
}

impl ReviewerReport {
    pub fn build<R: ReviewSource>(service: &ReviewService<R>, reviewer: i32) -> Self {
        Self {
            reviewer,
            review_count: service.count_reviews_by_reviewer(reviewer),
            average_grade: service.average_grade_by_reviewer(reviewer),
            grades: service.grade_distribution_by_reviewer(reviewer),
            movies_newest_first: service.top_movies_by_reviewer(reviewer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieReport {
    pub movie: i32,
    pub review_count: usize,
    pub average_grade: f64,
    pub grades: GradeDistribution,
    pub reviewers_newest_first: Vec<i32>,
}

impl MovieReport {
    pub fn build<R: ReviewSource>(service: &ReviewService<R>, movie: i32) -> Self {
        Self {
            movie,
            review_count: service.count_reviews_by_movie(movie),
            average_grade: service.average_grade_by_movie(movie),
            grades: service.grade_distribution_by_movie(movie),
            reviewers_newest_first: service.reviewers_by_movie(movie),
        }
    }
}

/// Snapshot-wide rankings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub review_count: usize,
    pub average_policy: AveragePolicy,
    pub most_productive_reviewers: Vec<i32>,
    pub movies_with_most_top_grades: Vec<i32>,
    pub top_amount: i32,
    pub top_rated_movies: Vec<i32>,
}

impl RankingReport {
    pub fn build<R: ReviewSource>(service: &ReviewService<R>, top_amount: i32) -> StatsResult<Self> {
        // Validate before any other query reads the source
        let top_rated_movies = service.top_rated_movies(top_amount)?;

        Ok(Self {
            review_count: service.review_count(),
            average_policy: service.average_policy(),
            most_productive_reviewers: service.most_productive_reviewers(),
            movies_with_most_top_grades: service.movies_with_most_top_grades(),
            top_amount,
            top_rated_movies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use chrono::{TimeZone, Utc};
    use movie_stats_models::Review;
    use movie_stats_sources::InMemoryReviewSource;

    fn service() -> ReviewService<InMemoryReviewSource> {
        let day = |d| Utc.with_ymd_and_hms(2005, 1, d, 0, 0, 0).unwrap();
        ReviewService::new(InMemoryReviewSource::new(vec![
            Review::new(1, 10, 4, day(1)),
            Review::new(2, 10, 2, day(3)),
            Review::new(1, 20, 5, day(2)),
        ]))
    }

    #[test]
    fn test_reviewer_report() {
        let report = ReviewerReport::build(&service(), 1);

        assert_eq!(report.review_count, 2);
        assert_eq!(report.average_grade, 4.5);
        assert_eq!(report.grades.get(5), 1);
        assert_eq!(report.movies_newest_first, vec![20, 10]);
    }

    #[test]
    fn test_movie_report() {
        let report = MovieReport::build(&service(), 10);

        assert_eq!(report.review_count, 2);
        assert_eq!(report.average_grade, 3.0);
        assert_eq!(report.reviewers_newest_first, vec![2, 1]);
    }

    #[test]
    fn test_ranking_report() {
        let report = RankingReport::build(&service(), 5).unwrap();

        assert_eq!(report.review_count, 3);
        assert_eq!(report.most_productive_reviewers, vec![1]);
        assert_eq!(report.movies_with_most_top_grades, vec![20]);
        assert_eq!(report.top_rated_movies, vec![20, 10]);
    }

    #[test]
    fn test_ranking_report_rejects_bad_amount() {
        assert_eq!(
            RankingReport::build(&service(), 0).unwrap_err(),
            StatsError::InvalidAmount { amount: 0 }
        );
    }

    #[test]
    fn test_report_serializes() {
        let json = serde_json::to_value(RankingReport::build(&service(), 1).unwrap()).unwrap();

        assert_eq!(json["average_policy"], "exact");
        assert_eq!(json["top_rated_movies"], serde_json::json!([20]));
    }
}
