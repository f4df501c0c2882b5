use std::collections::HashMap;

use serde::Serialize;

/// One `{ name, value }` bar or slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub name: String,
    pub value: usize,
}

/// A bucket carrying its chart fill colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredBucket {
    pub name: String,
    pub value: usize,
    pub fill: &'static str,
}

/// Counter that remembers first-seen key order, so ties and unsorted views
/// come out the same on every run regardless of hashing.
#[derive(Debug, Default)]
pub struct Tally {
    index: HashMap<String, usize>,
    buckets: Vec<Bucket>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.buckets[i].value += 1,
            None => {
                self.index.insert(key.to_string(), self.buckets.len());
                self.buckets.push(Bucket {
                    name: key.to_string(),
                    value: 1,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets in first-seen order.
    pub fn into_buckets(self) -> Vec<Bucket> {
        self.buckets
    }

    /// Descending by count; equal counts keep first-seen order. `limit`
    /// truncates after sorting.
    pub fn ranked(self, limit: Option<usize>) -> Vec<Bucket> {
        let mut buckets = self.buckets;
        buckets.sort_by(|a, b| b.value.cmp(&a.value));
        if let Some(n) = limit {
            buckets.truncate(n);
        }
        buckets
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
