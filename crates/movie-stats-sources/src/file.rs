use crate::error::SourceError;
use crate::json::from_json;
use crate::traits::ReviewSource;
use movie_stats_models::{is_expected_grade, Review};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Review source loaded from a JSON array of reviews.
///
/// The file is parsed once when the source is built; later changes to the file
/// are not picked up.
#[derive(Debug, Clone)]
pub struct JsonReviewSource {
    path: Option<PathBuf>,
    reviews: Vec<Review>,
}

impl JsonReviewSource {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let reviews = Self::parse(&content)?;
        info!("Loaded {} reviews from {}", reviews.len(), path.display());

        Ok(Self {
            path: Some(path.to_path_buf()),
            reviews,
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self, SourceError> {
        let reviews = Self::parse(content)?;
        debug!("Parsed {} reviews from inline JSON", reviews.len());
        Ok(Self { path: None, reviews })
    }

    fn parse(content: &str) -> Result<Vec<Review>, SourceError> {
        let reviews: Vec<Review> = from_json(content)?;

        let unexpected = reviews.iter().filter(|r| !is_expected_grade(r.grade)).count();
        if unexpected > 0 {
            warn!("{} reviews carry a grade outside 1-5; keeping them as-is", unexpected);
        }

        Ok(reviews)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

impl ReviewSource for JsonReviewSource {
    fn source_name(&self) -> &str {
        "json"
    }

    fn get_all(&self) -> Vec<Review> {
        self.reviews.clone()
    }
}
