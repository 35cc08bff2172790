use crate::traits::ReviewSource;
use movie_stats_models::Review;

/// Review source backed by a vector held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewSource {
    reviews: Vec<Review>,
}

impl InMemoryReviewSource {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self { reviews }
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

impl From<Vec<Review>> for InMemoryReviewSource {
    fn from(reviews: Vec<Review>) -> Self {
        Self::new(reviews)
    }
}

impl ReviewSource for InMemoryReviewSource {
    fn source_name(&self) -> &str {
        "memory"
    }

    fn get_all(&self) -> Vec<Review> {
        self.reviews.clone()
    }
}
