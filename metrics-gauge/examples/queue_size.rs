use std::{thread, time::Duration};

use metrics_gauge::{LabelKey, LabelValue, LongGauge, Metric};
use tracing::{info, Level};

fn main() -> Result<(), metrics_gauge::Error> {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let gauge = LongGauge::builder("queue_size")
        .with_description("Pending jobs")
        .with_unit("1")
        .with_label_keys(vec![LabelKey::new("Name", "desc")])
        .build();

    // It is recommended to keep a handle to a time series rather than resolving it every time.
    let default_series = gauge.get_default_time_series();
    let inbound_series = gauge.get_or_create_time_series(&[LabelValue::new("Inbound")])?;

    thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..10 {
                default_series.add(1);
                thread::sleep(Duration::from_millis(10));
            }
        });
        s.spawn(|| {
            for depth in [15, 12, 20, 3] {
                inbound_series.set(depth);
                thread::sleep(Duration::from_millis(20));
            }
        });
    });

    if let Err(e) = gauge.get_or_create_time_series(&[]) {
        info!(error = %e, "Mismatched label values are rejected.");
    }

    let snapshot = gauge.snapshot();
    for point in snapshot.points() {
        let labels = point.label_values().iter().map(ToString::to_string).collect::<Vec<_>>();
        info!(
            metric = snapshot.descriptor().name(),
            labels = ?labels,
            value = point.value(),
            "Observed time series."
        );
    }

    Ok(())
}
