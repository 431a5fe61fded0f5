use serde::{Deserialize, Serialize};

pub const BUCKET_COUNT: usize = 10;

/// Sum of the UTF-16 code units of `key`, modulo [`BUCKET_COUNT`].
///
/// A weak demonstration hash, kept as-is for teaching.
pub fn bucket_of(key: &str) -> usize {
    let sum: u64 = key.encode_utf16().map(u64::from).sum();
    (sum % BUCKET_COUNT as u64) as usize
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashHighlight {
    pub bucket: usize,
    pub key: String,
}

/// Whether an insert appended a new pair or overwrote an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Updated,
}

/// Fixed array of separate-chaining buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashTableModel {
    buckets: Vec<Vec<Pair>>,
    highlighted: Option<HashHighlight>,
}

impl Default for HashTableModel {
    fn default() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKET_COUNT],
            highlighted: None,
        }
    }
}

impl HashTableModel {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut table = Self::default();
        for (k, v) in pairs {
            table.insert(k, v);
        }
        table.highlighted = None;
        table
    }

    pub fn buckets(&self) -> &[Vec<Pair>] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    pub fn highlighted(&self) -> Option<&HashHighlight> {
        self.highlighted.as_ref()
    }

    /// Updates the value in place when the key is already in its bucket,
    /// appends otherwise. Returns the bucket and what happened.
    pub fn insert(&mut self, key: &str, value: &str) -> (usize, Upsert) {
        let bucket = bucket_of(key);
        let chain = &mut self.buckets[bucket];
        let upsert = match chain.iter_mut().find(|p| p.key == key) {
            Some(pair) => {
                pair.value = value.to_string();
                Upsert::Updated
            }
            None => {
                chain.push(Pair {
                    key: key.to_string(),
                    value: value.to_string(),
                });
                Upsert::Inserted
            }
        };
        self.highlight(bucket, key);
        (bucket, upsert)
    }

    /// Looks the key up in its bucket. Returns the bucket and the value if any.
    pub fn search(&mut self, key: &str) -> (usize, Option<String>) {
        let bucket = bucket_of(key);
        let value = self.buckets[bucket]
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.clone());
        self.highlight(bucket, key);
        (bucket, value)
    }

    /// Removes the key if present. Absence is reported through the flag only.
    pub fn delete(&mut self, key: &str) -> (usize, bool) {
        let bucket = bucket_of(key);
        let chain = &mut self.buckets[bucket];
        let removed = match chain.iter().position(|p| p.key == key) {
            Some(i) => {
                chain.remove(i);
                true
            }
            None => false,
        };
        self.highlight(bucket, key);
        (bucket, removed)
    }

    fn highlight(&mut self, bucket: usize, key: &str) {
        self.highlighted = Some(HashHighlight {
            bucket,
            key: key.to_string(),
        });
    }
}
