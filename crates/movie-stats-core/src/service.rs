// Review statistics over a review source snapshot

use crate::distribution::GradeDistribution;
use crate::error::{StatsError, StatsResult};
use crate::tally::Tally;
use chrono::{DateTime, Utc};
use movie_stats_models::{AveragePolicy, Review, TOP_GRADE};
use movie_stats_sources::ReviewSource;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// Answers statistical queries about the reviews held by a [`ReviewSource`].
///
/// The service keeps no state between calls. Every query reads one fresh
/// snapshot from the source, computes its answer from it and drops it.
pub struct ReviewService<R> {
    repository: R,
    average_policy: AveragePolicy,
}

impl<R: ReviewSource> ReviewService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            average_policy: AveragePolicy::default(),
        }
    }

    /// Build a service from a source that may be absent.
    pub fn try_new(repository: Option<R>) -> StatsResult<Self> {
        repository.map(Self::new).ok_or(StatsError::MissingRepository)
    }

    pub fn with_average_policy(mut self, policy: AveragePolicy) -> Self {
        self.average_policy = policy;
        self
    }

    pub fn average_policy(&self) -> AveragePolicy {
        self.average_policy
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn snapshot(&self) -> Vec<Review> {
        let reviews = self.repository.get_all();
        debug!(
            "snapshot: source={}, review_count={}",
            self.repository.source_name(),
            reviews.len()
        );
        reviews
    }

    fn average_where(&self, matches: impl Fn(&Review) -> bool) -> f64 {
        let (sum, count) = self
            .snapshot()
            .iter()
            .filter(|r| matches(*r))
            .fold((0i64, 0usize), |(sum, count), r| (sum + i64::from(r.grade), count + 1));
        self.average_policy.mean(sum, count)
    }

    fn count_where(&self, matches: impl Fn(&Review) -> bool) -> usize {
        self.snapshot().iter().filter(|r| matches(*r)).count()
    }

    pub fn review_count(&self) -> usize {
        self.snapshot().len()
    }

    pub fn average_grade_by_reviewer(&self, reviewer: i32) -> f64 {
        self.average_where(|r| r.reviewer == reviewer)
    }

    pub fn average_grade_by_movie(&self, movie: i32) -> f64 {
        self.average_where(|r| r.movie == movie)
    }

    pub fn count_reviews_by_movie(&self, movie: i32) -> usize {
        self.count_where(|r| r.movie == movie)
    }

    pub fn count_reviews_by_reviewer(&self, reviewer: i32) -> usize {
        self.count_where(|r| r.reviewer == reviewer)
    }

    pub fn count_grade_by_movie(&self, movie: i32, grade: i32) -> usize {
        self.count_where(|r| r.movie == movie && r.grade == grade)
    }

    pub fn count_grade_by_reviewer(&self, reviewer: i32, grade: i32) -> usize {
        self.count_where(|r| r.reviewer == reviewer && r.grade == grade)
    }

    pub fn grade_distribution_by_movie(&self, movie: i32) -> GradeDistribution {
        GradeDistribution::from_grades(
            self.snapshot().iter().filter(|r| r.movie == movie).map(|r| r.grade),
        )
    }

    pub fn grade_distribution_by_reviewer(&self, reviewer: i32) -> GradeDistribution {
        GradeDistribution::from_grades(
            self.snapshot().iter().filter(|r| r.reviewer == reviewer).map(|r| r.grade),
        )
    }

    /// Reviewers tied for the highest number of reviews, in the order they
    /// first appear in the snapshot.
    pub fn most_productive_reviewers(&self) -> Vec<i32> {
        let mut tally = Tally::new();
        for review in self.snapshot() {
            tally.add(review.reviewer, review.grade);
        }

        let leaders = tally.leaders();
        debug!(
            "most_productive_reviewers: distinct_reviewers={}, leaders={}",
            tally.len(),
            leaders.len()
        );
        leaders
    }

    /// Movies tied for the highest number of top grades, in the order they
    /// first appear among top-graded reviews.
    pub fn movies_with_most_top_grades(&self) -> Vec<i32> {
        let mut tally = Tally::new();
        for review in self.snapshot().into_iter().filter(|r| r.grade == TOP_GRADE) {
            tally.add(review.movie, review.grade);
        }

        let leaders = tally.leaders();
        debug!(
            "movies_with_most_top_grades: top_graded_movies={}, leaders={}",
            tally.len(),
            leaders.len()
        );
        leaders
    }

    /// Up to `amount` movies by descending average grade. Equal averages keep
    /// the order in which the movies first appear in the snapshot.
    ///
    /// Fails without touching the source when `amount` is below 1.
    pub fn top_rated_movies(&self, amount: i32) -> StatsResult<Vec<i32>> {
        if amount < 1 {
            return Err(StatsError::InvalidAmount { amount });
        }

        let mut tally = Tally::new();
        for review in self.snapshot() {
            tally.add(review.movie, review.grade);
        }

        let mut ranked: Vec<(i32, f64)> = tally
            .entries()
            .iter()
            .map(|e| (e.key, self.average_policy.mean(e.grade_sum, e.count)))
            .collect();

        // Stable sort: ties stay in first-seen order
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let top: Vec<i32> = ranked
            .into_iter()
            .take(amount as usize)
            .map(|(movie, _)| movie)
            .collect();

        debug!(
            "top_rated_movies: amount={}, distinct_movies={}, result_count={}",
            amount,
            tally.len(),
            top.len()
        );
        Ok(top)
    }

    /// Reviewers of a movie, most recent review first.
    pub fn reviewers_by_movie(&self, movie: i32) -> Vec<i32> {
        most_recent_first(
            self.snapshot()
                .into_iter()
                .filter(|r| r.movie == movie)
                .map(|r| (r.reviewer, r.review_date))
                .collect(),
        )
    }

    /// Movies rated by a reviewer, most recent review first.
    pub fn top_movies_by_reviewer(&self, reviewer: i32) -> Vec<i32> {
        most_recent_first(
            self.snapshot()
                .into_iter()
                .filter(|r| r.reviewer == reviewer)
                .map(|r| (r.movie, r.review_date))
                .collect(),
        )
    }
}

/// Orders ids by date, newest first, listing each id once at its newest date.
/// Equal dates keep snapshot order.
fn most_recent_first(mut dated: Vec<(i32, DateTime<Utc>)>) -> Vec<i32> {
    dated.sort_by(|a, b| b.1.cmp(&a.1));

    let mut seen = HashSet::new();
    dated
        .into_iter()
        .filter(|(id, _)| seen.insert(*id))
        .map(|(id, _)| id)
        .collect()
}
