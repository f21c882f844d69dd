use std::{sync::Arc, time::SystemTime};

use crate::{LabelValue, LabelValues, MetricDescriptor, TimeSeries};

/// The value of a single time series at the time it was read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    label_values: LabelValues,
    value: i64,
    timestamp: SystemTime,
}

impl Point {
    pub(crate) fn read(label_values: LabelValues, series: &TimeSeries) -> Self {
        let value = series.value();
        Self { label_values, value, timestamp: SystemTime::now() }
    }

    /// Label values of the time series.
    pub fn label_values(&self) -> &[LabelValue] {
        &self.label_values
    }

    /// Value of the time series.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Time at which the value was read.
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}

/// A snapshot of every time series of a metric.
///
/// Points are listed in no particular order.
#[derive(Clone, Debug)]
pub struct MetricSnapshot {
    descriptor: Arc<MetricDescriptor>,
    points: Vec<Point>,
}

impl MetricSnapshot {
    pub(crate) fn new(descriptor: Arc<MetricDescriptor>, points: Vec<Point>) -> Self {
        Self { descriptor, points }
    }

    /// Descriptor of the metric.
    pub fn descriptor(&self) -> &MetricDescriptor {
        &self.descriptor
    }

    /// Points of the snapshot, one per time series.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes this snapshot, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use super::Point;
    use crate::{LabelValue, LabelValues, TimeSeries};

    #[test]
    fn test_point_reads_current_value() {
        let series = TimeSeries::new();
        series.set(-5);

        let before = SystemTime::now();
        let point = Point::read(LabelValues::new(vec![LabelValue::new("a")]), &series);
        series.set(7);

        assert_eq!(point.value(), -5);
        assert_eq!(point.label_values(), &[LabelValue::new("a")]);
        assert!(point.timestamp() >= before);
    }
}
