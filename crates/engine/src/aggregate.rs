use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

/// Running min/max/sum/count for one key.
///
/// Only constructible from an observed value, so `count` is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyAggregate {
    min: f64,
    max: f64,
    sum: f64,
    count: u64,
}

impl KeyAggregate {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value,
            count: 1,
        }
    }

    /// Fold one more observation in.
    pub fn record(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
    }

    /// Fold another aggregate of the same key in.
    pub fn merge(&mut self, other: &Self) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub const fn sum(&self) -> f64 {
        self.sum
    }

    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Unrounded `sum / count`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Key to aggregate mapping built by one chunk, or by the final merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateTable {
    entries: HashMap<String, KeyAggregate>,
}

impl AggregateTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `value` into the aggregate for `key`, creating it on first sight.
    pub fn record(&mut self, key: &str, value: f64) {
        // avoid allocating the key on the hot path
        if let Some(agg) = self.entries.get_mut(key) {
            agg.record(value);
        } else {
            self.entries.insert(key.to_owned(), KeyAggregate::new(value));
        }
    }

    /// Consume `other`, folding every key into `self`.
    pub fn merge(&mut self, other: Self) {
        if self.entries.is_empty() {
            self.entries = other.entries;
            return;
        }
        for (key, agg) in other.entries {
            match self.entries.entry(key) {
                Entry::Occupied(mut slot) => slot.get_mut().merge(&agg),
                Entry::Vacant(slot) => {
                    slot.insert(agg);
                }
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&KeyAggregate> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of records folded into the table.
    #[must_use]
    pub fn record_count(&self) -> u64 {
        self.entries.values().map(KeyAggregate::count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeyAggregate)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries in ascending byte order of the key.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &KeyAggregate)> {
        let mut rows: Vec<_> = self.iter().collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
        rows
    }
}

impl<'a> FromIterator<(&'a str, f64)> for AggregateTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.record(key, value);
        }
        table
    }
}
