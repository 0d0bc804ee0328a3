//! Machine-readable projection of a plan document.
//!
//! [`build_projection`] maps a plan to the nine step outputs downstream jobs
//! read; [`sink`] writes them as `key=value` lines.

mod projection;
pub mod sink;

pub use projection::{OUTPUT_KEYS, Projection, build_projection, canonicalize_json};
pub use sink::{append_kv_lines, render_kv_lines, write_kv_lines};
