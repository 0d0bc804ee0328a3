use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use railplan_types::{PlanDocument, ShapeError};
use thiserror::Error;
use tracing::debug;

/// Environment variable that may hold the plan document text.
pub const PLAN_JSON_ENV: &str = "PLAN_JSON";

/// Where a plan document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanSource {
    File(Utf8PathBuf),
    Inline(String),
    Env(String),
    /// The built-in empty plan; only the summary renderer falls back to it.
    Empty,
}

impl PlanSource {
    pub fn label(&self) -> &'static str {
        match self {
            PlanSource::File(_) => "file",
            PlanSource::Inline(_) => "inline",
            PlanSource::Env(_) => PLAN_JSON_ENV,
            PlanSource::Empty => "empty default",
        }
    }
}

/// The candidate inputs, before priority is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanInputs {
    pub file: Option<Utf8PathBuf>,
    pub inline: Option<String>,
    pub env: Option<String>,
}

impl PlanInputs {
    /// Collect inputs, reading [`PLAN_JSON_ENV`] from the process environment.
    pub fn with_process_env(file: Option<Utf8PathBuf>, inline: Option<String>) -> Self {
        Self {
            file,
            inline,
            env: std::env::var(PLAN_JSON_ENV).ok(),
        }
    }

    /// First available source: file, then inline text, then environment.
    /// Empty values are treated as not provided.
    pub fn select(&self) -> Option<PlanSource> {
        if let Some(path) = self.file.as_ref().filter(|p| !p.as_str().is_empty()) {
            return Some(PlanSource::File(path.clone()));
        }
        if let Some(text) = self.inline.as_ref().filter(|s| !s.is_empty()) {
            return Some(PlanSource::Inline(text.clone()));
        }
        self.env
            .as_ref()
            .filter(|s| !s.is_empty())
            .map(|text| PlanSource::Env(text.clone()))
    }

    /// Like [`select`](Self::select), failing when nothing was provided.
    pub fn require(&self) -> Result<PlanSource, PlanLoadError> {
        self.select().ok_or(PlanLoadError::NotProvided)
    }

    /// Like [`select`](Self::select), falling back to the empty plan.
    pub fn or_empty(&self) -> PlanSource {
        self.select().unwrap_or(PlanSource::Empty)
    }
}

#[derive(Debug, Error)]
pub enum PlanLoadError {
    #[error("plan json not provided (use --plan-json-file, --plan-json or PLAN_JSON)")]
    NotProvided,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json parse error in {origin} plan: {source}")]
    Json {
        origin: &'static str,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

pub fn load_plan(source: &PlanSource) -> Result<PlanDocument, PlanLoadError> {
    debug!(source = source.label(), "loading plan document");

    let parsed = match source {
        PlanSource::File(path) => parse(&read_file(path)?, source),
        PlanSource::Inline(text) | PlanSource::Env(text) => parse(text, source),
        PlanSource::Empty => return Ok(PlanDocument::empty()),
    }?;

    Ok(PlanDocument::from_value(parsed)?)
}

fn read_file(path: &Utf8Path) -> Result<String, PlanLoadError> {
    // fs-err puts the path into the error message.
    Ok(fs::read_to_string(path)?)
}

fn parse(text: &str, source: &PlanSource) -> Result<serde_json::Value, PlanLoadError> {
    serde_json::from_str(text).map_err(|e| PlanLoadError::Json {
        origin: source.label(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(file: Option<&str>, inline: Option<&str>, env: Option<&str>) -> PlanInputs {
        PlanInputs {
            file: file.map(Utf8PathBuf::from),
            inline: inline.map(str::to_string),
            env: env.map(str::to_string),
        }
    }

    #[test]
    fn file_beats_inline_and_env() {
        let i = inputs(Some("plan.json"), Some("{}"), Some("{}"));
        assert_eq!(i.select(), Some(PlanSource::File("plan.json".into())));
    }

    #[test]
    fn inline_beats_env() {
        let i = inputs(None, Some("{\"a\":1}"), Some("{}"));
        assert_eq!(i.select(), Some(PlanSource::Inline("{\"a\":1}".into())));
    }

    #[test]
    fn empty_values_fall_through() {
        let i = inputs(Some(""), Some(""), Some("{}"));
        assert_eq!(i.select(), Some(PlanSource::Env("{}".into())));
    }

    #[test]
    fn require_fails_without_input() {
        let err = inputs(None, None, Some("")).require().unwrap_err();
        assert!(matches!(err, PlanLoadError::NotProvided));
    }

    #[test]
    fn or_empty_falls_back() {
        assert_eq!(PlanInputs::default().or_empty(), PlanSource::Empty);
    }
}
