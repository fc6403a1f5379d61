use crate::models::{AnnotatedSnapshot, YearlySnapshot};

/// Orders snapshots by year and annotates each one with the percentage
/// change from the previous year.
///
/// The earliest year always carries a change of exactly `0`. A change
/// whose previous value is `0` (or whose result is not finite) is `None`.
/// Snapshots sharing a year keep their input order and are compared
/// against each other like any other neighbours.
pub fn compute(snapshots: &[YearlySnapshot]) -> Vec<AnnotatedSnapshot> {
    let mut sorted = snapshots.to_vec();
    sorted.sort_by_key(|snapshot| snapshot.year);

    let mut annotated = Vec::with_capacity(sorted.len());
    for (index, current) in sorted.iter().enumerate() {
        let (engagement_rate_change, views_change) = match index.checked_sub(1) {
            None => (Some(0.0), Some(0.0)),
            Some(prev_index) => {
                let previous = &sorted[prev_index];
                (
                    percent_change(previous.avg_engagement_rate, current.avg_engagement_rate),
                    percent_change(previous.total_views as f64, current.total_views as f64),
                )
            }
        };

        annotated.push(AnnotatedSnapshot {
            year: current.year,
            avg_engagement_rate: current.avg_engagement_rate,
            total_views: current.total_views,
            engagement_rate_change,
            views_change,
        });
    }

    annotated
}

/// Decodes the backend's `GraphData` field, which is itself a JSON document.
pub fn parse_graph_data(raw: &str) -> Result<Vec<YearlySnapshot>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn percent_change(previous: f64, current: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    let change = round2((current - previous) / previous * 100.0);
    change.is_finite().then_some(change)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
