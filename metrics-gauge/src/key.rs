use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    slice::Iter,
};

use crate::{Hashable, LabelValue};

/// An owned sequence of label values identifying a time series.
///
/// The hash of the sequence is computed once at construction, and is identical to the hash of
/// the equivalent borrowed slice (see [`Hashable`]).  Two `LabelValues` are equal if they have the
/// same length and their values are equal pairwise.
#[derive(Clone)]
pub struct LabelValues {
    values: Vec<LabelValue>,
    hash: u64,
}

impl LabelValues {
    /// Creates a `LabelValues` from the given values.
    pub fn new(values: Vec<LabelValue>) -> Self {
        let hash = values.as_slice().hashable();
        LabelValues { values, hash }
    }

    /// Creates a `LabelValues` of `len` unset values.
    pub fn unset(len: usize) -> Self {
        Self::new(vec![LabelValue::unset(); len])
    }

    /// Creates a `LabelValues` from a borrowed slice whose hash was already computed.
    pub(crate) fn from_slice_hashed(values: &[LabelValue], hash: u64) -> Self {
        LabelValues { values: values.to_vec(), hash }
    }

    /// Gets the pre-computed hash of this sequence.
    pub fn get_hash(&self) -> u64 {
        self.hash
    }

    /// Label values of this sequence.
    pub fn values(&self) -> Iter<'_, LabelValue> {
        self.values.iter()
    }

    /// Returns `true` if every value in this sequence is unset.
    pub fn is_unset(&self) -> bool {
        self.values.iter().all(LabelValue::is_unset)
    }

    /// Consumes this `LabelValues`, returning the underlying values.
    pub fn into_inner(self) -> Vec<LabelValue> {
        self.values
    }
}

impl Deref for LabelValues {
    type Target = [LabelValue];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl PartialEq for LabelValues {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.values == other.values
    }
}

impl Eq for LabelValues {}

impl Hash for LabelValues {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Debug for LabelValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl fmt::Display for LabelValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.values.iter().map(ToString::to_string).collect::<Vec<_>>();
        write!(f, "[{}]", values.join(", "))
    }
}

impl From<Vec<LabelValue>> for LabelValues {
    fn from(values: Vec<LabelValue>) -> Self {
        LabelValues::new(values)
    }
}
