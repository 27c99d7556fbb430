//! Text rendering of the record list, summary panel, and charts.
//!
//! Everything here is a pure function of current state: the renderers own
//! no data and can be swapped for any other frontend without touching the
//! rest of the library.

mod chart;
mod list;
mod summary;

pub use chart::{Chart, ChartKind, ChartRegistry, ChartSpec};
pub use list::{format_clock, render_records};
pub use summary::render_summary;
