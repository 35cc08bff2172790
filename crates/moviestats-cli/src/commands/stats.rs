use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use movie_stats_config::{Config, PathManager};
use movie_stats_core::{GradeDistribution, MovieReport, RankingReport, ReviewService, ReviewerReport};
use movie_stats_models::{AveragePolicy, TOP_GRADE};
use movie_stats_sources::{JsonReviewSource, ReviewSource};
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

/// Data-related flags given on the command line; unset values fall back to the config file.
pub struct DataOptions {
    pub file: Option<PathBuf>,
    pub average: Option<AveragePolicy>,
}

/// `--file`, then `data.reviews_file`, then the default data directory
pub fn resolve_reviews_file(file: Option<PathBuf>, config: &Config, path_manager: &PathManager) -> PathBuf {
    file.or_else(|| config.data.reviews_file.clone())
        .unwrap_or_else(|| path_manager.default_reviews_file())
}

pub fn open_service(options: &DataOptions, config: &Config, path_manager: &PathManager) -> Result<ReviewService<JsonReviewSource>> {
    let path = resolve_reviews_file(options.file.clone(), config, path_manager);
    let source = JsonReviewSource::from_file(&path)
        .wrap_err_with(|| format!("Failed to load reviews from {}", path.display()))?;

    let policy = options.average.unwrap_or(config.stats.average);
    info!("Using {} reviews from {} (average: {})", source.len(), path.display(), policy.as_str());

    Ok(ReviewService::new(source).with_average_policy(policy))
}

pub fn run_reviewer<R: ReviewSource>(service: &ReviewService<R>, reviewer: i32, output: &Output) -> Result<()> {
    let report = ReviewerReport::build(service, reviewer);

    output.report(&report, || {
        if report.review_count == 0 {
            output.warn(format!("Reviewer {} has no reviews", reviewer));
            return Ok(());
        }

        output.info(format!(
            "Reviewer {}: {} reviews, average grade {}",
            reviewer.bright_cyan(),
            report.review_count,
            format_average(report.average_grade)
        ));
        output.table(&distribution_table(&report.grades));
        output.table(&id_table("Movies (newest first)", &report.movies_newest_first));
        Ok(())
    })
}

pub fn run_movie<R: ReviewSource>(service: &ReviewService<R>, movie: i32, output: &Output) -> Result<()> {
    let report = MovieReport::build(service, movie);

    output.report(&report, || {
        if report.review_count == 0 {
            output.warn(format!("Movie {} has no reviews", movie));
            return Ok(());
        }

        output.info(format!(
            "Movie {}: {} reviews, average grade {}",
            movie.bright_cyan(),
            report.review_count,
            format_average(report.average_grade)
        ));
        output.table(&distribution_table(&report.grades));
        output.table(&id_table("Reviewers (newest first)", &report.reviewers_newest_first));
        Ok(())
    })
}

pub fn run_productive<R: ReviewSource>(service: &ReviewService<R>, output: &Output) -> Result<()> {
    let reviewers = service.most_productive_reviewers();

    output.report(&json!({ "most_productive_reviewers": reviewers }), || {
        if reviewers.is_empty() {
            output.warn("No reviews found");
            return Ok(());
        }

        let mut table = styled_table(vec!["Reviewer", "Reviews"]);
        for reviewer in &reviewers {
            table.add_row(vec![
                Cell::new(reviewer),
                Cell::new(service.count_reviews_by_reviewer(*reviewer)),
            ]);
        }
        output.table(&table);
        Ok(())
    })
}

pub fn run_top_graded<R: ReviewSource>(service: &ReviewService<R>, output: &Output) -> Result<()> {
    let movies = service.movies_with_most_top_grades();

    output.report(&json!({ "movies_with_most_top_grades": movies }), || {
        if movies.is_empty() {
            output.warn("No movie has received a top grade");
            return Ok(());
        }

        let mut table = styled_table(vec!["Movie", "Top Grades", "Reviews"]);
        for movie in &movies {
            table.add_row(vec![
                Cell::new(movie),
                Cell::new(service.count_grade_by_movie(*movie, TOP_GRADE)),
                Cell::new(service.count_reviews_by_movie(*movie)),
            ]);
        }
        output.table(&table);
        Ok(())
    })
}

pub fn run_top_rated<R: ReviewSource>(service: &ReviewService<R>, amount: i32, output: &Output) -> Result<()> {
    let movies = service.top_rated_movies(amount)?;

    output.report(&json!({ "amount": amount, "top_rated_movies": movies }), || {
        if movies.is_empty() {
            output.warn("No reviews found");
            return Ok(());
        }

        let mut table = styled_table(vec!["Rank", "Movie", "Average", "Reviews"]);
        for (rank, movie) in movies.iter().enumerate() {
            table.add_row(vec![
                Cell::new(rank + 1),
                Cell::new(movie),
                Cell::new(format_average(service.average_grade_by_movie(*movie))),
                Cell::new(service.count_reviews_by_movie(*movie)),
            ]);
        }
        output.table(&table);
        Ok(())
    })
}

pub fn run_summary<R: ReviewSource>(service: &ReviewService<R>, amount: i32, output: &Output) -> Result<()> {
    let report = RankingReport::build(service, amount)?;

    output.report(&report, || {
        let mut table = styled_table(vec!["Statistic", "Value"]);
        table.add_row(vec![Cell::new("Reviews"), Cell::new(report.review_count)]);
        table.add_row(vec![Cell::new("Average"), Cell::new(report.average_policy.as_str())]);
        table.add_row(vec![Cell::new("Most Productive Reviewers"), Cell::new(join_ids(&report.most_productive_reviewers))]);
        table.add_row(vec![Cell::new("Most Top-Graded Movies"), Cell::new(join_ids(&report.movies_with_most_top_grades))]);
        table.add_row(vec![
            Cell::new(format!("Top {} Rated Movies", report.top_amount)),
            Cell::new(join_ids(&report.top_rated_movies)),
        ]);
        output.table(&table);
        Ok(())
    })
}

fn styled_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_header(
        header
            .into_iter()
            .map(|h| Cell::new(h).fg(comfy_table::Color::Cyan).add_attribute(comfy_table::Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn distribution_table(grades: &GradeDistribution) -> Table {
    let mut table = styled_table(vec!["Grade", "Reviews"]);
    for (grade, count) in grades.iter() {
        table.add_row(vec![Cell::new(grade), Cell::new(count)]);
    }
    table
}

fn id_table(title: &str, ids: &[i32]) -> Table {
    let mut table = styled_table(vec![title]);
    for id in ids {
        table.add_row(vec![Cell::new(id)]);
    }
    table
}

fn format_average(average: f64) -> String {
    format!("{:.2}", average)
}

fn join_ids(ids: &[i32]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}
