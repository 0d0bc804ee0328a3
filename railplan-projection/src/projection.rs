use railplan_types::PlanDocument;
use serde_json::Value;

/// Output keys in emission order.
pub const OUTPUT_KEYS: [&str; 9] = [
    "files",
    "changed_files_count",
    "surfaces",
    "trace",
    "packages",
    "count",
    "build_args",
    "matrix",
    "active_surfaces",
];

/// Step output values. Every value is single-line text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    /// Compact JSON array of non-empty changed paths, document order.
    pub files: String,
    pub changed_files_count: String,
    /// Compact JSON of the surfaces object with keys sorted at every level.
    pub surfaces: String,
    /// Compact JSON of the trace array as written by the planner.
    pub trace: String,
    /// Space-joined sorted union of direct and transitive packages.
    pub packages: String,
    pub count: String,
    /// `-p <name>` per package, same order as `packages`.
    pub build_args: String,
    /// Compact JSON array of the package union.
    pub matrix: String,
    /// Compact JSON array of enabled surface names, sorted.
    pub active_surfaces: String,
}

impl Projection {
    /// `(key, value)` pairs in [`OUTPUT_KEYS`] order.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            (OUTPUT_KEYS[0], self.files.as_str()),
            (OUTPUT_KEYS[1], self.changed_files_count.as_str()),
            (OUTPUT_KEYS[2], self.surfaces.as_str()),
            (OUTPUT_KEYS[3], self.trace.as_str()),
            (OUTPUT_KEYS[4], self.packages.as_str()),
            (OUTPUT_KEYS[5], self.count.as_str()),
            (OUTPUT_KEYS[6], self.build_args.as_str()),
            (OUTPUT_KEYS[7], self.matrix.as_str()),
            (OUTPUT_KEYS[8], self.active_surfaces.as_str()),
        ]
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

pub fn build_projection(plan: &PlanDocument) -> Projection {
    let files = plan.changed_paths();
    let packages = plan.impact().union();
    let build_args = packages
        .iter()
        .map(|name| format!("-p {name}"))
        .collect::<Vec<_>>()
        .join(" ");

    Projection {
        changed_files_count: files.len().to_string(),
        files: compact_json(&Value::from(files)),
        surfaces: compact_json(&canonicalize_json(&plan.surfaces_value())),
        trace: compact_json(&plan.trace_value()),
        count: packages.len().to_string(),
        packages: packages.join(" "),
        build_args,
        matrix: compact_json(&Value::from(packages)),
        active_surfaces: compact_json(&Value::from(plan.active_surfaces())),
    }
}

/// Serialise without whitespace. Non-ASCII is written as UTF-8.
fn compact_json(value: &Value) -> String {
    value.to_string()
}

/// Copy of `value` with every object's keys in sorted order.
pub fn canonicalize_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<_> = map.keys().cloned().collect();
            keys.sort();
            let mut out = serde_json::Map::new();
            for k in keys {
                if let Some(v) = map.get(&k) {
                    out.insert(k, canonicalize_json(v));
                }
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize_json).collect()),
        other => other.clone(),
    }
}
