// Print layout support: static font metrics, greedy word-wrap, and the
// page geometry used by the paginated export.
// CPU-bound document packaging must run inside tokio::task::spawn_blocking.

pub mod font_metrics;

// Re-export the public API consumed by other modules (export, main).
pub use font_metrics::{default_page_config, get_metrics, FontFace, PageConfig};
