pub mod distribution;
pub mod error;
pub mod report;
pub mod service;
mod tally;

pub use distribution::GradeDistribution;
pub use error::{StatsError, StatsResult};
pub use report::{MovieReport, RankingReport, ReviewerReport};
pub use service::ReviewService;
