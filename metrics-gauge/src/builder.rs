use std::borrow::Cow;

use tracing::debug;

use crate::{GaugeSeriesStore, LabelKey, LongGauge, MetricDescriptor, SharedString};

const DEFAULT_UNIT: &str = "1";

/// Builder for a [`LongGauge`].
///
/// The label keys given to the builder are fixed for the lifetime of the gauge: every time series
/// is addressed by exactly one label value per label key.
#[derive(Clone, Debug)]
pub struct LongGaugeBuilder {
    name: SharedString,
    description: SharedString,
    unit: SharedString,
    label_keys: Vec<LabelKey>,
    shard_count: Option<usize>,
}

impl LongGaugeBuilder {
    /// Creates a new `LongGaugeBuilder` for a gauge with the given name.
    pub fn new<N>(name: N) -> Self
    where
        N: Into<SharedString>,
    {
        Self {
            name: name.into(),
            description: Cow::Borrowed(""),
            unit: Cow::Borrowed(DEFAULT_UNIT),
            label_keys: Vec::new(),
            shard_count: None,
        }
    }

    /// Set the description of the gauge.
    ///
    /// Defaults to an empty description.
    #[must_use]
    pub fn with_description<D>(mut self, description: D) -> Self
    where
        D: Into<SharedString>,
    {
        self.description = description.into();
        self
    }

    /// Set the unit of the gauge.
    ///
    /// Defaults to `"1"`, the unit of dimensionless quantities.
    #[must_use]
    pub fn with_unit<U>(mut self, unit: U) -> Self
    where
        U: Into<SharedString>,
    {
        self.unit = unit.into();
        self
    }

    /// Set the label keys of the gauge.
    ///
    /// Defaults to no label keys, in which case the gauge has a single time series: the default
    /// one.
    #[must_use]
    pub fn with_label_keys(mut self, label_keys: Vec<LabelKey>) -> Self {
        self.label_keys = label_keys;
        self
    }

    /// Set the number of shards the series store is split into.
    ///
    /// More shards reduce contention when many distinct time series are created concurrently.  The
    /// value is rounded up to the next power of two.
    ///
    /// Defaults to the number of CPUs.
    #[must_use]
    pub fn with_shard_count(mut self, shard_count: usize) -> Self {
        self.shard_count = Some(shard_count);
        self
    }

    /// Builds the gauge.
    pub fn build(self) -> LongGauge {
        let store = match self.shard_count {
            Some(shard_count) => {
                GaugeSeriesStore::with_shard_count(self.label_keys.clone(), shard_count)
            }
            None => GaugeSeriesStore::new(self.label_keys.clone()),
        };

        debug!(name = &*self.name, label_keys = self.label_keys.len(), "Built long gauge.");

        let descriptor =
            MetricDescriptor::new(self.name, self.description, self.unit, self.label_keys);
        LongGauge::from_parts(descriptor, store)
    }
}
