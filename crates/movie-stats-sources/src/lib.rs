pub mod error;
pub mod file;
pub mod json;
pub mod memory;
pub mod traits;

pub use error::SourceError;
pub use file::JsonReviewSource;
pub use json::{from_json, to_json};
pub use memory::InMemoryReviewSource;
pub use traits::ReviewSource;
