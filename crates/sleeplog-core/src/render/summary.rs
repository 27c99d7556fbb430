//! Summary panel rendering.

use crate::stats::SleepSummary;

/// Day count, average, status label, and status detail sentence.
pub fn render_summary(summary: &SleepSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Days tracked:  {}\n", summary.day_count));
    out.push_str(&format!("Average sleep: {:.2} h\n", summary.average_hours));
    out.push_str(&format!("Status:        {}\n", summary.status.label()));
    let detail = summary.detail_sentence();
    if !detail.is_empty() {
        out.push_str(&detail);
        out.push('\n');
    }
    out
}
