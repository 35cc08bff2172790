use movie_stats_models::Review;
use std::sync::Arc;

/// Read-only supplier of review records.
///
/// `get_all` hands out an owned snapshot: callers may hold on to it while the
/// backing storage changes without seeing those changes.
pub trait ReviewSource {
    // Source metadata
    fn source_name(&self) -> &str;

    // Data retrieval
    fn get_all(&self) -> Vec<Review>;
}

impl<T: ReviewSource + ?Sized> ReviewSource for &T {
    fn source_name(&self) -> &str {
        (**self).source_name()
    }

    fn get_all(&self) -> Vec<Review> {
        (**self).get_all()
    }
}

impl<T: ReviewSource + ?Sized> ReviewSource for Box<T> {
    fn source_name(&self) -> &str {
        (**self).source_name()
    }

    fn get_all(&self) -> Vec<Review> {
        (**self).get_all()
    }
}

impl<T: ReviewSource + ?Sized> ReviewSource for Arc<T> {
    fn source_name(&self) -> &str {
        (**self).source_name()
    }

    fn get_all(&self) -> Vec<Review> {
        (**self).get_all()
    }
}
