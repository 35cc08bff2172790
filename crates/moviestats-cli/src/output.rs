use clap::ValueEnum;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

/// Kind of a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    fn marker(self) -> Option<String> {
        match self {
            Level::Success => Some("✓".green().to_string()),
            Level::Warning => Some("⚠".yellow().to_string()),
            Level::Error => Some("✗".red().to_string()),
            Level::Info => None,
        }
    }
}

/// Writes statistics and status messages either as terminal text or as JSON
/// lines on stdout. Errors go through even in quiet mode.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn success(&self, msg: impl AsRef<str>) {
        self.message(Level::Success, msg.as_ref());
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        self.message(Level::Error, msg.as_ref());
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        self.message(Level::Info, msg.as_ref());
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        self.message(Level::Warning, msg.as_ref());
    }

    fn message(&self, level: Level, msg: &str) {
        if self.quiet && level != Level::Error {
            return;
        }

        match (self.format, level.marker()) {
            (OutputFormat::Human, Some(marker)) if level == Level::Error => eprintln!("{} {}", marker, msg),
            (OutputFormat::Human, Some(marker)) => println!("{} {}", marker, msg),
            (OutputFormat::Human, None) => println!("{}", msg),
            _ => self.emit_json(&json!({ "type": level.tag(), "message": msg })),
        }
    }

    /// Emit a statistics result. JSON formats serialize `value`; human output
    /// is left to `human`, which is not called otherwise.
    pub fn report<T, F>(&self, value: &T, human: F) -> color_eyre::Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> color_eyre::Result<()>,
    {
        match self.format {
            OutputFormat::Human => human(),
            OutputFormat::Json | OutputFormat::JsonPretty => {
                if !self.quiet {
                    println!("{}", self.render_json(value)?);
                }
                Ok(())
            }
        }
    }

    /// Print a table in human mode. JSON results go through `report` or `json`.
    pub fn table(&self, table: &Table) {
        if self.quiet || self.format != OutputFormat::Human {
            return;
        }
        println!("{}", table);
    }

    pub fn json(&self, data: &serde_json::Value) {
        if self.quiet && self.format != OutputFormat::Human {
            return;
        }
        self.emit_json(data);
    }

    fn emit_json(&self, data: &serde_json::Value) {
        match self.render_json(data) {
            Ok(line) => println!("{}", line),
            Err(_) => println!("{}", data),
        }
    }

    fn render_json<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::JsonPretty => serde_json::to_string_pretty(value),
            OutputFormat::Json | OutputFormat::Human => serde_json::to_string(value),
        }
    }
}
