//! Concurrent storage for the time series of a gauge.
use std::{
    hash::BuildHasherDefault,
    iter::repeat_with,
    sync::{PoisonError, RwLock},
};

use hashbrown::{hash_map::RawEntryMut, HashMap};
use tracing::{debug, trace};

use crate::{Error, Hashable, KeyHasher, LabelKey, LabelValue, LabelValues, TimeSeries};

type SeriesHasher = KeyHasher;
type SeriesHashMap = HashMap<LabelValues, TimeSeries, BuildHasherDefault<SeriesHasher>>;

/// A label-addressed store of gauge time series.
///
/// `GaugeSeriesStore` maintains a mapping from label values to [`TimeSeries`], creating each time
/// series the first time its label values are requested.  The number of label values is fixed by
/// the label keys given at construction.
///
/// A default time series, whose label values are all unset, is created along with the store and
/// is never removed.  Time series are never removed either: they live until the store, and every
/// handle to them, is dropped.
///
/// ## Performance
///
/// `GaugeSeriesStore` is optimized for reads.  The mapping is split into shards, each guarded by
/// its own lock, and looking up an existing time series only takes a read lock on a single shard
/// without allocating.  Updating a time series never touches the store at all.
pub struct GaugeSeriesStore {
    label_keys: Vec<LabelKey>,
    shards: Vec<RwLock<SeriesHashMap>>,
    shard_mask: usize,
    default_series: TimeSeries,
}

impl GaugeSeriesStore {
    /// Creates a new `GaugeSeriesStore` for the given label keys.
    ///
    /// The store is split into as many shards as there are CPUs, rounded up to the next power of
    /// two.
    pub fn new(label_keys: Vec<LabelKey>) -> Self {
        Self::with_shard_count(label_keys, num_cpus::get())
    }

    /// Creates a new `GaugeSeriesStore` for the given label keys, with a specific number of
    /// shards.
    ///
    /// The shard count is rounded up to the next power of two, and is at least one.
    pub fn with_shard_count(label_keys: Vec<LabelKey>, shard_count: usize) -> Self {
        let shard_count = shard_count.max(1).next_power_of_two();
        let shard_mask = shard_count - 1;
        let mut shards: Vec<RwLock<SeriesHashMap>> =
            repeat_with(|| RwLock::new(SeriesHashMap::default())).take(shard_count).collect();

        let default_key = LabelValues::unset(label_keys.len());
        let default_series = TimeSeries::new();
        let shard = &mut shards[default_key.get_hash() as usize & shard_mask];
        shard
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(default_key, default_series.clone());

        Self { label_keys, shards, shard_mask, default_series }
    }

    /// Label keys declared for this store.
    pub fn label_keys(&self) -> &[LabelKey] {
        &self.label_keys
    }

    /// Gets the default time series.
    ///
    /// The default time series is the one whose label values are all unset.  The same time series
    /// is returned on every call.
    pub fn get_default_time_series(&self) -> TimeSeries {
        self.default_series.clone()
    }

    /// Gets or creates the time series for the given label values.
    ///
    /// If a time series already exists for label values equal to `label_values`, it is returned.
    /// Otherwise, a new time series is created with a value of zero.  Concurrent callers asking
    /// for the same label values always receive the same time series.
    ///
    /// Passing only unset label values returns the default time series.
    ///
    /// # Errors
    ///
    /// If the number of label values does not match the number of label keys, then
    /// [`Error::InvalidLabelCount`] is returned and the store is left unchanged.
    pub fn get_or_create_time_series(
        &self,
        label_values: &[LabelValue],
    ) -> Result<TimeSeries, Error> {
        if label_values.len() != self.label_keys.len() {
            debug!(
                expected = self.label_keys.len(),
                actual = label_values.len(),
                "Rejected time series lookup with mismatched label count."
            );
            return Err(Error::InvalidLabelCount {
                expected: self.label_keys.len(),
                actual: label_values.len(),
            });
        }

        let (hash, shard) = self.get_hash_and_shard(label_values);

        // Try and get the time series if it exists.
        let shard_read = shard.read().unwrap_or_else(PoisonError::into_inner);
        if let Some((_, series)) =
            shard_read.raw_entry().from_hash(hash, |key| **key == *label_values)
        {
            return Ok(series.clone());
        }

        // Switch to a write guard, checking again in case someone inserted it in the meantime.
        drop(shard_read);
        let mut shard_write = shard.write().unwrap_or_else(PoisonError::into_inner);
        let (_, series) =
            match shard_write.raw_entry_mut().from_hash(hash, |key| **key == *label_values) {
                RawEntryMut::Occupied(entry) => entry.into_key_value(),
                RawEntryMut::Vacant(entry) => {
                    trace!(?label_values, "Created time series.");
                    entry.insert_hashed_nocheck(
                        hash,
                        LabelValues::from_slice_hashed(label_values, hash),
                        TimeSeries::new(),
                    )
                }
            };

        Ok(series.clone())
    }

    /// Number of time series in this store, including the default time series.
    pub fn series_count(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| shard.read().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }

    /// Visits every time series stored in this store.
    ///
    /// This operation does not lock the entire store, but proceeds directly through the shards that
    /// are kept internally.  As a result, a time series that is created after the call to `visit`,
    /// but before `visit` finishes, may not be observed.
    ///
    /// `collect` is called while holding the read lock of the shard being visited, so it must not
    /// create time series in this store.
    pub fn visit<F>(&self, mut collect: F)
    where
        F: FnMut(&LabelValues, &TimeSeries),
    {
        for shard in self.shards.iter() {
            let shard_read = shard.read().unwrap_or_else(PoisonError::into_inner);
            for (label_values, series) in shard_read.iter() {
                collect(label_values, series);
            }
        }
    }

    /// Gets a map of all present time series, mapped by label values.
    ///
    /// The map holds handles to the live time series, so values read through it are current at the
    /// time of reading, not at the time the map was built.
    pub fn get_series_handles(&self) -> HashMap<LabelValues, TimeSeries> {
        let mut handles = HashMap::new();
        self.visit(|label_values, series| {
            handles.insert(label_values.clone(), series.clone());
        });
        handles
    }

    #[inline]
    fn get_hash_and_shard(&self, label_values: &[LabelValue]) -> (u64, &RwLock<SeriesHashMap>) {
        let hash = label_values.hashable();

        // SAFETY: We initialize the vector of shards with a power-of-two length, and
        // `self.shard_mask` is `self.shards.len() - 1`, thus we can never have a result from the
        // masking operation that results in a value which is not in bounds of our shards vector.
        let shard = unsafe { self.shards.get_unchecked(hash as usize & self.shard_mask) };

        (hash, shard)
    }
}
