use std::{borrow::Cow, fmt};

/// An allocation-optimized string.
///
/// Static strings are stored by reference, while dynamic strings are owned.
pub type SharedString = Cow<'static, str>;

/// A declared label dimension of a metric.
///
/// Label keys are fixed when a metric is built, and define both how many label values are
/// required to address a time series and which position each value occupies.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct LabelKey {
    key: SharedString,
    description: SharedString,
}

impl LabelKey {
    /// Creates a [`LabelKey`] from a key and description.
    pub fn new<K, D>(key: K, description: D) -> Self
    where
        K: Into<SharedString>,
        D: Into<SharedString>,
    {
        LabelKey { key: key.into(), description: description.into() }
    }

    /// Creates a [`LabelKey`] from a static key and description.
    pub const fn from_static_parts(key: &'static str, description: &'static str) -> Self {
        LabelKey { key: Cow::Borrowed(key), description: Cow::Borrowed(description) }
    }

    /// Key of this label.
    pub fn key(&self) -> &str {
        self.key.as_ref()
    }

    /// Description of this label.
    pub fn description(&self) -> &str {
        self.description.as_ref()
    }
}

/// The value of a label for a specific time series.
///
/// A label value may be unset, meaning that no value was recorded for that dimension.  The
/// default time series of a metric is the one whose label values are all unset.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Default)]
pub struct LabelValue(Option<SharedString>);

impl LabelValue {
    /// Creates a [`LabelValue`] holding the given value.
    pub fn new<V>(value: V) -> Self
    where
        V: Into<SharedString>,
    {
        LabelValue(Some(value.into()))
    }

    /// Creates an unset [`LabelValue`].
    pub const fn unset() -> Self {
        LabelValue(None)
    }

    /// Creates a [`LabelValue`] from a static value.
    pub const fn from_static(value: &'static str) -> Self {
        LabelValue(Some(Cow::Borrowed(value)))
    }

    /// Value of this label, or `None` if it is unset.
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns `true` if no value is set.
    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => f.write_str(value),
            None => f.write_str("<unset>"),
        }
    }
}

impl From<&'static str> for LabelValue {
    fn from(value: &'static str) -> Self {
        LabelValue::from_static(value)
    }
}

impl From<String> for LabelValue {
    fn from(value: String) -> Self {
        LabelValue::new(value)
    }
}

impl From<Option<String>> for LabelValue {
    fn from(value: Option<String>) -> Self {
        LabelValue(value.map(Cow::Owned))
    }
}
