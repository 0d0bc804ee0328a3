//! Split surfaces into the built-in and custom status tables.

use railplan_types::{BUILTIN_SURFACES, Surface};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfacePartition {
    /// Every built-in surface in [`BUILTIN_SURFACES`] order; absent ones are disabled.
    pub builtin: Vec<(&'static str, Surface)>,
    /// `custom:` surfaces sorted by name.
    pub custom: Vec<(String, Surface)>,
}

/// Names that are neither built-in nor `custom:` appear in neither table.
pub fn partition_surfaces(surfaces: &BTreeMap<String, Surface>) -> SurfacePartition {
    let builtin = BUILTIN_SURFACES
        .iter()
        .map(|&name| (name, surfaces.get(name).cloned().unwrap_or_default()))
        .collect();

    let mut custom: Vec<(String, Surface)> = surfaces
        .iter()
        .filter(|(name, _)| Surface::is_custom(name))
        .map(|(name, s)| (name.clone(), s.clone()))
        .collect();
    custom.sort_by(|a, b| a.0.cmp(&b.0));

    SurfacePartition { builtin, custom }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn on(reasons: &[i64]) -> Surface {
        Surface {
            enabled: true,
            reasons: reasons.to_vec(),
        }
    }

    #[test]
    fn builtin_rows_always_present() {
        let p = partition_surfaces(&BTreeMap::new());
        let names: Vec<_> = p.builtin.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["build", "test", "bench", "docs", "infra"]);
        assert!(p.builtin.iter().all(|(_, s)| !s.enabled && s.reasons.is_empty()));
        assert!(p.custom.is_empty());
    }

    #[test]
    fn custom_and_other_names_are_separated() {
        let mut surfaces = BTreeMap::new();
        surfaces.insert("custom:zz".to_string(), on(&[1]));
        surfaces.insert("custom:lint".to_string(), Surface::default());
        surfaces.insert("fuzz".to_string(), on(&[2]));
        surfaces.insert("test".to_string(), on(&[3]));

        let p = partition_surfaces(&surfaces);

        let custom: Vec<_> = p.custom.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(custom, vec!["custom:lint", "custom:zz"]);
        assert_eq!(p.builtin[1], ("test", on(&[3])));
        assert!(p.builtin.iter().all(|(n, _)| *n != "fuzz"));
    }
}
