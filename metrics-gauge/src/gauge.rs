use std::sync::Arc;

use crate::{
    Error, GaugeSeriesStore, LabelKey, LabelValue, LongGaugeBuilder, MetricSnapshot, Point,
    SharedString, TimeSeries,
};

/// A metric made of label-addressed time series.
pub trait Metric {
    /// The time series type of this metric.
    type TimeSeries;

    /// Gets or creates the time series for the given label values.
    ///
    /// The number of label values must match the number of label keys the metric was built with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLabelCount`] if the number of label values is wrong.
    fn get_or_create_time_series(
        &self,
        label_values: &[LabelValue],
    ) -> Result<Self::TimeSeries, Error>;

    /// Gets the default time series, whose label values are all unset.
    fn get_default_time_series(&self) -> Self::TimeSeries;
}

/// Name, description, unit and label keys of a metric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricDescriptor {
    name: SharedString,
    description: SharedString,
    unit: SharedString,
    label_keys: Vec<LabelKey>,
}

impl MetricDescriptor {
    pub(crate) fn new(
        name: SharedString,
        description: SharedString,
        unit: SharedString,
        label_keys: Vec<LabelKey>,
    ) -> Self {
        Self { name, description, unit, label_keys }
    }

    /// Name of the metric.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Description of the metric.
    pub fn description(&self) -> &str {
        self.description.as_ref()
    }

    /// Unit of the metric.
    pub fn unit(&self) -> &str {
        self.unit.as_ref()
    }

    /// Label keys of the metric.
    pub fn label_keys(&self) -> &[LabelKey] {
        &self.label_keys
    }
}

/// A gauge reporting an instantaneous measurement of a signed 64-bit integer.
///
/// Gauges can go both up and down, and their values can be negative.  Measurements are partitioned
/// into time series by the label keys the gauge was built with; see [`GaugeSeriesStore`] for how
/// time series are created and shared.
pub struct LongGauge {
    descriptor: Arc<MetricDescriptor>,
    store: GaugeSeriesStore,
}

impl LongGauge {
    /// Creates a [`LongGaugeBuilder`] for a gauge with the given name.
    pub fn builder<N>(name: N) -> LongGaugeBuilder
    where
        N: Into<SharedString>,
    {
        LongGaugeBuilder::new(name)
    }

    pub(crate) fn from_parts(descriptor: MetricDescriptor, store: GaugeSeriesStore) -> Self {
        Self { descriptor: Arc::new(descriptor), store }
    }

    /// Descriptor of this gauge.
    pub fn descriptor(&self) -> &MetricDescriptor {
        &self.descriptor
    }

    /// Series store backing this gauge.
    pub fn store(&self) -> &GaugeSeriesStore {
        &self.store
    }

    /// Takes a snapshot of every time series of this gauge.
    ///
    /// Each time series is read independently, and stamped with the time it was read at: the
    /// snapshot is not a consistent point-in-time view across time series.
    pub fn snapshot(&self) -> MetricSnapshot {
        let points = self
            .store
            .get_series_handles()
            .into_iter()
            .map(|(label_values, series)| Point::read(label_values, &series))
            .collect();

        MetricSnapshot::new(self.descriptor.clone(), points)
    }
}

impl Metric for LongGauge {
    type TimeSeries = TimeSeries;

    fn get_or_create_time_series(&self, label_values: &[LabelValue]) -> Result<TimeSeries, Error> {
        self.store.get_or_create_time_series(label_values)
    }

    fn get_default_time_series(&self) -> TimeSeries {
        self.store.get_default_time_series()
    }
}

#[cfg(test)]
mod tests {
    use super::{LongGauge, Metric};
    use crate::{Error, LabelKey, LabelValue, TimeSeries};

    #[test]
    fn test_gauge_delegates_to_store() {
        let gauge = LongGauge::builder("queue_size")
            .with_label_keys(vec![LabelKey::new("Name", "desc")])
            .build();

        let default = gauge.get_default_time_series();
        default.add(10);

        let inbound =
            gauge.get_or_create_time_series(&[LabelValue::new("Inbound")]).expect("valid");
        inbound.set(15);

        assert_eq!(gauge.get_default_time_series().value(), 10);
        assert!(TimeSeries::ptr_eq(
            &inbound,
            &gauge.get_or_create_time_series(&[LabelValue::new("Inbound")]).expect("valid")
        ));
        assert_eq!(gauge.store().series_count(), 2);

        let err = gauge.get_or_create_time_series(&[]).unwrap_err();
        assert_eq!(err, Error::InvalidLabelCount { expected: 1, actual: 0 });
        assert_eq!(err.to_string(), "invalid label count: expected 1 label values, got 0");
    }

    #[test]
    fn test_snapshot() {
        let gauge = LongGauge::builder("queue_size")
            .with_description("Pending jobs")
            .with_label_keys(vec![LabelKey::new("Name", "desc")])
            .build();

        gauge.get_default_time_series().add(10);
        gauge.get_or_create_time_series(&[LabelValue::new("Inbound")]).expect("valid").set(15);

        let snapshot = gauge.snapshot();
        assert_eq!(snapshot.descriptor().name(), "queue_size");
        assert_eq!(snapshot.descriptor().description(), "Pending jobs");

        let mut points = snapshot
            .points()
            .iter()
            .map(|p| (p.label_values().to_vec(), p.value()))
            .collect::<Vec<_>>();
        points.sort_by_key(|(_, value)| *value);

        assert_eq!(
            points,
            vec![(vec![LabelValue::unset()], 10), (vec![LabelValue::new("Inbound")], 15)]
        );
    }
}
