use crate::access::{self, Object};
use serde_json::{Value, json};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

/// Surfaces every plan reports on, in display order.
pub const BUILTIN_SURFACES: [&str; 5] = ["build", "test", "bench", "docs", "infra"];

/// Name prefix marking user-defined surfaces.
pub const CUSTOM_SURFACE_PREFIX: &str = "custom:";

const DIRECT_KEYS: &[&str] = &["direct_packages", "direct_crates", "direct"];
const TRANSITIVE_KEYS: &[&str] = &["transitive_packages", "transitive_crates", "transitive"];
const PACKAGE_KEYS: &[&str] = &["package", "crate"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("plan document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// A loaded plan document.
///
/// Holds the planner's JSON object as-is; the typed accessors below read it
/// with defaults, so a sparse or partially malformed document still yields a
/// complete (if empty) view.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDocument {
    root: Object,
}

impl PlanDocument {
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ShapeError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// The document used when no plan is supplied to the summary renderer.
    pub fn empty() -> Self {
        let mut root = Object::new();
        root.insert("files".to_string(), json!([]));
        root.insert(
            "impact".to_string(),
            json!({ "direct_packages": [], "transitive_packages": [] }),
        );
        root.insert("surfaces".to_string(), json!({}));
        root.insert("trace".to_string(), json!([]));
        Self { root }
    }

    pub fn files(&self) -> Vec<FileChange> {
        access::array(&self.root, "files")
            .iter()
            .map(FileChange::from_value)
            .collect()
    }

    /// Non-empty changed paths in document order.
    pub fn changed_paths(&self) -> Vec<String> {
        self.files()
            .into_iter()
            .map(|f| f.path)
            .filter(|p| !p.is_empty())
            .collect()
    }

    pub fn impact(&self) -> ImpactSet {
        match access::object(&self.root, "impact") {
            Some(impact) => ImpactSet {
                direct_packages: access::token_list_any(impact, DIRECT_KEYS),
                transitive_packages: access::token_list_any(impact, TRANSITIVE_KEYS),
            },
            None => ImpactSet::default(),
        }
    }

    /// Surfaces keyed by name. Entries that are not objects read as disabled.
    pub fn surfaces(&self) -> BTreeMap<String, Surface> {
        access::object(&self.root, "surfaces")
            .map(|surfaces| {
                surfaces
                    .iter()
                    .map(|(name, v)| (name.clone(), Surface::from_value(v)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The raw `surfaces` object, or `{}`.
    pub fn surfaces_value(&self) -> Value {
        access::object(&self.root, "surfaces")
            .cloned()
            .map(Value::Object)
            .unwrap_or_else(|| Value::Object(Object::new()))
    }

    pub fn trace(&self) -> Vec<TraceEntry> {
        access::array(&self.root, "trace")
            .iter()
            .map(TraceEntry::from_value)
            .collect()
    }

    /// The raw `trace` array, or `[]`.
    pub fn trace_value(&self) -> Value {
        Value::Array(access::array(&self.root, "trace").to_vec())
    }

    /// Names of surfaces whose `enabled` is the literal `true`, sorted.
    pub fn active_surfaces(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .surfaces()
            .into_iter()
            .filter(|(_, s)| s.enabled)
            .map(|(name, _)| name)
            .collect();
        names.sort();
        names
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileChange {
    /// Empty when the entry has no usable path.
    pub path: String,
}

impl FileChange {
    pub fn from_value(value: &Value) -> Self {
        let path = value
            .as_object()
            .and_then(|o| access::non_empty_str(o, "path"))
            .unwrap_or_default()
            .to_string();
        Self { path }
    }
}

/// Packages touched by the change. The lists keep the planner's order and
/// may overlap or repeat; names with whitespace or control characters are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpactSet {
    pub direct_packages: Vec<String>,
    pub transitive_packages: Vec<String>,
}

impl ImpactSet {
    /// Deduplicated, lexicographically sorted union of both lists.
    pub fn union(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .direct_packages
            .iter()
            .chain(&self.transitive_packages)
            .map(String::as_str)
            .collect();
        set.into_iter().map(str::to_string).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Surface {
    pub enabled: bool,
    /// Trace entry ids, in the order the planner recorded them.
    pub reasons: Vec<i64>,
}

impl Surface {
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(o) => Self {
                enabled: access::is_true(o, "enabled"),
                reasons: access::integer_list(o, "reasons"),
            },
            None => Self::default(),
        }
    }

    pub fn is_custom(name: &str) -> bool {
        name.starts_with(CUSTOM_SURFACE_PREFIX)
    }
}

/// One causal step recorded by the planner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceEntry {
    pub id: Option<i64>,
    pub code: String,
    pub file: Option<String>,
    pub package: Option<String>,
    pub depends_on: Option<String>,
    pub surface: Option<String>,
}

impl TraceEntry {
    pub fn from_value(value: &Value) -> Self {
        let Some(o) = value.as_object() else {
            return Self::default();
        };
        let owned = |s: Option<&str>| s.map(str::to_string);
        Self {
            id: access::integer(o, "id"),
            code: access::non_empty_str(o, "code")
                .unwrap_or_default()
                .to_string(),
            file: owned(access::non_empty_str(o, "file")),
            package: owned(access::non_empty_str_any(o, PACKAGE_KEYS)),
            depends_on: owned(access::non_empty_str(o, "depends_on")),
            surface: owned(access::non_empty_str(o, "surface")),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
