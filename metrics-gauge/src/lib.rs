//! Label-partitioned integer gauges.
//!
//! A gauge is a metric that can go up and down, arbitrarily, over time. `metrics-gauge` provides
//! [`LongGauge`], a gauge over signed 64-bit integers, whose measurements can optionally be
//! partitioned by a fixed set of label keys into independent time series.
//!
//! # Overview
//!
//! A [`LongGauge`] is created through [`LongGaugeBuilder`], which captures the name, description
//! and unit of the metric, along with the ordered list of [`LabelKey`]s that every time series of
//! the gauge is identified by.  Once built, the set of label keys -- and therefore the number of
//! label values required to address a time series -- is fixed.
//!
//! Each distinct combination of [`LabelValue`]s maps to exactly one [`TimeSeries`], created lazily
//! the first time it is requested.  A default time series, addressed by leaving every label value
//! unset, always exists.
//!
//! Time series handles are cheap to clone and are meant to be held on to: resolving a handle goes
//! through the series store, while updating a handle is a single atomic operation.
//!
//! # Examples
//!
//! ```rust
//! use metrics_gauge::{LabelKey, LabelValue, LongGauge, Metric};
//!
//! # fn main() -> Result<(), metrics_gauge::Error> {
//! let gauge = LongGauge::builder("queue_size")
//!     .with_description("Pending jobs")
//!     .with_unit("1")
//!     .with_label_keys(vec![LabelKey::new("Name", "desc")])
//!     .build();
//!
//! let default_series = gauge.get_default_time_series();
//! default_series.add(10);
//!
//! let inbound_series = gauge.get_or_create_time_series(&[LabelValue::new("Inbound")])?;
//! inbound_series.set(15);
//!
//! assert_eq!(default_series.value(), 10);
//! assert_eq!(inbound_series.value(), 15);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! All types are thread-safe.  Updates to a single time series are linearizable, updates to
//! different time series never contend with each other, and concurrent requests for the same
//! label values always resolve to the same time series.
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]

pub mod atomics;

mod builder;
pub use self::builder::LongGaugeBuilder;

mod common;
pub use self::common::{Hashable, KeyHasher};

mod error;
pub use self::error::Error;

mod gauge;
pub use self::gauge::{LongGauge, Metric, MetricDescriptor};

mod handles;
pub use self::handles::{LongGaugeFn, TimeSeries};

mod key;
pub use self::key::LabelValues;

mod label;
pub use self::label::{LabelKey, LabelValue, SharedString};

pub mod registry;
pub use self::registry::GaugeSeriesStore;

mod snapshot;
pub use self::snapshot::{MetricSnapshot, Point};
