use std::{
    sync::{Arc, Barrier},
    thread,
};

use metrics_gauge::{GaugeSeriesStore, LabelKey, LabelValue, LongGauge, Metric, TimeSeries};

const THREADS: usize = 8;

fn store() -> GaugeSeriesStore {
    GaugeSeriesStore::with_shard_count(vec![LabelKey::new("Name", "desc")], 4)
}

#[test]
fn test_concurrent_creation_yields_single_series() {
    let store = store();
    let barrier = Barrier::new(THREADS);
    let label_values = [LabelValue::new("Inbound")];

    let handles: Vec<TimeSeries> = thread::scope(|s| {
        let workers = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    store.get_or_create_time_series(&label_values).expect("valid label count")
                })
            })
            .collect::<Vec<_>>();

        workers.into_iter().map(|w| w.join().expect("worker panicked")).collect()
    });

    let first = &handles[0];
    assert!(handles.iter().all(|h| TimeSeries::ptr_eq(first, h)));
    assert_eq!(store.series_count(), 2);
}

#[test]
fn test_concurrent_adds_sum() {
    const ADDS_PER_THREAD: i64 = 10_000;

    let store = store();
    let series = store.get_or_create_time_series(&[LabelValue::new("Inbound")]).expect("valid");

    thread::scope(|s| {
        for t in 0..THREADS {
            let store = &store;
            s.spawn(move || {
                // Resolve the handle on every iteration to keep the lookup path hot.
                for i in 0..ADDS_PER_THREAD {
                    let amount = if i % 2 == 0 { t as i64 } else { -1 };
                    let handle = store
                        .get_or_create_time_series(&[LabelValue::new("Inbound")])
                        .expect("valid");
                    handle.add(amount);
                }
            });
        }
    });

    let half = ADDS_PER_THREAD / 2;
    let expected: i64 = (0..THREADS as i64).map(|t| t * half - half).sum();
    assert_eq!(series.value(), expected);
}

#[test]
fn test_cells_are_independent_under_contention() {
    let store = Arc::new(store());
    let barrier = Arc::new(Barrier::new(THREADS));

    let workers = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let series = store
                    .get_or_create_time_series(&[LabelValue::new(format!("worker-{t}"))])
                    .expect("valid");
                barrier.wait();
                for _ in 0..1_000 {
                    series.add(1);
                }
                series.add(t as i64);
            })
        })
        .collect::<Vec<_>>();

    for worker in workers {
        worker.join().expect("worker panicked");
    }

    assert_eq!(store.series_count(), THREADS + 1);
    assert_eq!(store.get_default_time_series().value(), 0);
    for t in 0..THREADS {
        let series = store
            .get_or_create_time_series(&[LabelValue::new(format!("worker-{t}"))])
            .expect("valid");
        assert_eq!(series.value(), 1_000 + t as i64);
    }
}

#[test]
fn test_concurrent_set_is_last_write_wins() {
    let gauge = LongGauge::builder("queue_size").build();
    let series = gauge.get_default_time_series();

    thread::scope(|s| {
        for t in 0..THREADS {
            let series = series.clone();
            s.spawn(move || {
                for _ in 0..1_000 {
                    series.set(t as i64);
                }
            });
        }
    });

    // Every write stored one of the workers' values, so the survivor must be one of them.
    assert!((0..THREADS as i64).contains(&series.value()));

    series.set(-1);
    assert_eq!(gauge.get_default_time_series().value(), -1);
}

#[test]
fn test_snapshot_while_creating() {
    let gauge = LongGauge::builder("queue_size")
        .with_label_keys(vec![LabelKey::new("Name", "desc")])
        .with_shard_count(2)
        .build();

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..500 {
                gauge
                    .get_or_create_time_series(&[LabelValue::new(i.to_string())])
                    .expect("valid")
                    .set(i);
            }
        });

        for _ in 0..50 {
            let snapshot = gauge.snapshot();
            assert!(!snapshot.points().is_empty());
            assert!(snapshot.points().iter().all(|p| p.label_values().len() == 1));
        }
    });

    assert_eq!(gauge.snapshot().points().len(), 501);
}
