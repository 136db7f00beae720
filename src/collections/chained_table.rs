//! Fixed-capacity [hash table] resolving collisions by separate chaining.
//!
//! Every key hashes to one of `capacity` buckets; keys sharing a home
//! index are linked off that bucket as an owned forward chain. The table
//! never resizes — insertion pressure is absorbed into longer chains, and
//! lookups degrade toward a linear scan of the colliding keys.
//!
//! [hash table]: https://en.wikipedia.org/wiki/Hash_table

use core::fmt;
use core::hash::BuildHasher;

use log::debug;

use crate::collections::fnv::FnvBuildHasher;
use crate::error::TableError;

/// Default bucket count when none is specified.
const DEFAULT_CAPACITY: usize = 10;

/// A chain node owning its entry and its successor.
struct Node<V> {
    key: String,
    value: V,
    next: Option<Box<Node<V>>>,
}

/// Fixed-capacity [hash table] resolving collisions by separate chaining.
///
/// The bucket count is fixed at construction and never changes. Chains
/// grow without bound, so the table itself never refuses an insert; this
/// is a deliberate limitation, not an oversight — see the crate-level
/// documentation.
///
/// Keys are non-empty strings. The hasher defaults to
/// [`FnvBuildHasher`] so that home indices are reproducible across runs.
///
/// # Examples
///
/// ```
/// use hashtab::prelude::*;
///
/// let mut table = ChainedTable::new(5);
///
/// table.put("apple", 10).unwrap();
/// table.put("banana", 20).unwrap();
///
/// assert_eq!(table.get("apple"), Ok(&10));
/// assert_eq!(table.len(), 2);
///
/// assert!(table.remove("apple"));
/// assert_eq!(table.get("apple"), Err(TableError::NotFound("apple".into())));
/// ```
///
/// [hash table]: https://en.wikipedia.org/wiki/Hash_table
pub struct ChainedTable<V, H = FnvBuildHasher> {
    /// One optional chain head per home index.
    buckets: Vec<Option<Box<Node<V>>>>,
    /// Total number of chain nodes across all buckets.
    len: usize,
    /// Builds the hasher for per-key hashing.
    build_hasher: H,
}

impl<V> ChainedTable<V> {
    /// Creates an empty `ChainedTable` with the given bucket count.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let table: ChainedTable<i32> = ChainedTable::new(5);
    /// assert_eq!(table.capacity(), 5);
    /// assert!(table.is_empty());
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, FnvBuildHasher {})
    }
}

impl<V, H: BuildHasher> ChainedTable<V, H> {
    /// Creates an empty `ChainedTable` which will use the given hash
    /// builder to hash keys.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::hash::RandomState;
    ///
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ChainedTable::with_hasher(5, RandomState::new());
    /// table.put("apple", 10).unwrap();
    /// ```
    pub fn with_hasher(capacity: usize, build_hasher: H) -> Self {
        assert!(capacity > 0, "capacity must be greater than zero");

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);

        Self {
            buckets,
            len: 0,
            build_hasher,
        }
    }

    /// Inserts a key-value pair into the table.
    ///
    /// If the key is already present anywhere in its chain, its value is
    /// overwritten in place and the size does not change. Otherwise a new
    /// node is appended at the tail of the home bucket's chain.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidKey`] if `key` is empty. The table is
    /// unchanged in that case.
    ///
    /// # Time Complexity
    ///
    /// Takes average *O*(1) time. Worst case is *O*(*n*) when every key
    /// collides into the same bucket and the chain must be scanned to its
    /// tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ChainedTable::new(5);
    ///
    /// table.put("apple", 10).unwrap();
    /// assert_eq!(table.get("apple"), Ok(&10));
    ///
    /// // Overwrites in place; `len` stays 1.
    /// table.put("apple", 100).unwrap();
    /// assert_eq!(table.get("apple"), Ok(&100));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn put(&mut self, key: &str, value: V) -> Result<(), TableError> {
        if key.is_empty() {
            return Err(TableError::InvalidKey);
        }

        let index = self.home_index(key);

        let mut cur = &mut self.buckets[index];
        loop {
            match cur {
                Some(node) if node.key == key => {
                    node.value = value;
                    debug!("updated '{key}' at index {index}");
                    return Ok(());
                }
                Some(node) => cur = &mut node.next,
                None => {
                    *cur = Some(Box::new(Node {
                        key: key.to_owned(),
                        value,
                        next: None,
                    }));
                    self.len += 1;
                    debug!("stored '{key}' at index {index}");
                    return Ok(());
                }
            }
        }
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidKey`] if `key` is empty, and
    /// [`TableError::NotFound`] if the home bucket's chain is exhausted
    /// without a match.
    ///
    /// # Time Complexity
    ///
    /// Takes average *O*(1) time. Worst case is *O*(*n*) when every key
    /// collides into the same bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ChainedTable::new(5);
    /// table.put("apple", 10).unwrap();
    ///
    /// assert_eq!(table.get("apple"), Ok(&10));
    /// assert_eq!(table.get("cherry"), Err(TableError::NotFound("cherry".into())));
    /// ```
    pub fn get(&self, key: &str) -> Result<&V, TableError> {
        if key.is_empty() {
            return Err(TableError::InvalidKey);
        }

        let mut cur = self.buckets[self.home_index(key)].as_deref();
        while let Some(node) = cur {
            if node.key == key {
                return Ok(&node.value);
            }
            cur = node.next.as_deref();
        }

        Err(TableError::NotFound(key.to_owned()))
    }

    /// Removes a key from the table, returning whether an entry was found
    /// and removed.
    ///
    /// The matching node is spliced out of its chain, whether it sits at
    /// the bucket head or in the middle. Removing an absent key returns
    /// `false` and leaves the table unchanged. An empty key can never be
    /// stored, so it is a plain miss.
    ///
    /// # Time Complexity
    ///
    /// Takes average *O*(1) time. Worst case is *O*(*n*) when every key
    /// collides into the same bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ChainedTable::new(5);
    /// table.put("apple", 10).unwrap();
    ///
    /// assert!(table.remove("apple"));
    /// assert!(!table.remove("apple"));
    /// assert!(table.is_empty());
    /// ```
    pub fn remove(&mut self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }

        let index = self.home_index(key);

        let mut cur = &mut self.buckets[index];
        loop {
            if matches!(cur, Some(node) if node.key == key) {
                // Unlink the node; its successor takes its place. This
                // covers the head node as well, since `cur` then aliases
                // the bucket slot itself.
                if let Some(node) = cur.take() {
                    *cur = node.next;
                }

                self.len -= 1;
                debug!("removed '{key}' from index {index}");
                return true;
            }

            match cur {
                Some(node) => cur = &mut node.next,
                None => return false,
            }
        }
    }

    /// Returns `true` if the table contains an entry for the specified
    /// key.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ChainedTable::new(5);
    /// table.put("apple", 10).unwrap();
    ///
    /// assert!(table.contains_key("apple"));
    /// assert!(!table.contains_key("cherry"));
    /// ```
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Returns the number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets in the table. Fixed for the table's
    /// lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the ratio of entries to buckets.
    ///
    /// Chains are unbounded, so unlike an open-addressed table this can
    /// exceed 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ChainedTable::new(4);
    /// table.put("apple", 10).unwrap();
    /// table.put("banana", 20).unwrap();
    ///
    /// assert_eq!(table.load_factor(), 0.5);
    /// ```
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Returns the bucket index the key hashes to, before any collision
    /// resolution.
    #[inline]
    fn home_index(&self, key: &str) -> usize {
        (self.build_hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }
}

impl<V> Default for ChainedTable<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<V, H> fmt::Display for ChainedTable<V, H>
where
    V: fmt::Display,
{
    /// Renders every bucket's chain from head to tail, one line per
    /// bucket, followed by the entry count and load factor.
    ///
    /// Diagnostic output only; the format is not a stable contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, bucket) in self.buckets.iter().enumerate() {
            write!(f, "bucket {i}: ")?;

            let mut cur = bucket.as_deref();
            if cur.is_none() {
                writeln!(f, "empty")?;
                continue;
            }

            while let Some(node) = cur {
                write!(f, "({}: {})", node.key, node.value)?;
                if node.next.is_some() {
                    write!(f, " -> ")?;
                }
                cur = node.next.as_deref();
            }
            writeln!(f)?;
        }

        write!(
            f,
            "total items: {}, load factor: {:.2}",
            self.len,
            self.len as f64 / self.buckets.len() as f64
        )
    }
}

impl<V, H> fmt::Debug for ChainedTable<V, H>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for bucket in &self.buckets {
            let mut cur = bucket.as_deref();
            while let Some(node) = cur {
                map.entry(&node.key, &node.value);
                cur = node.next.as_deref();
            }
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::hash::{BuildHasher, Hasher};

    use quickcheck_macros::quickcheck;

    use super::*;

    /// Hashes every key to the same value, forcing all entries into one
    /// home index.
    #[derive(Debug, Copy, Clone)]
    struct ConstBuildHasher(u64);

    struct ConstHasher(u64);

    impl BuildHasher for ConstBuildHasher {
        type Hasher = ConstHasher;

        fn build_hasher(&self) -> Self::Hasher {
            ConstHasher(self.0)
        }
    }

    impl Hasher for ConstHasher {
        fn finish(&self) -> u64 {
            self.0
        }

        fn write(&mut self, _bytes: &[u8]) {}
    }

    fn chain_lengths<V, H>(table: &ChainedTable<V, H>) -> Vec<usize> {
        table
            .buckets
            .iter()
            .map(|bucket| {
                let mut n = 0;
                let mut cur = bucket.as_deref();
                while let Some(node) = cur {
                    n += 1;
                    cur = node.next.as_deref();
                }
                n
            })
            .collect()
    }

    #[test]
    fn test_put_and_get() {
        let mut table = ChainedTable::new(5);

        assert_eq!(table.len(), 0);
        assert!(table.put("apple", 10).is_ok());
        assert_eq!(table.len(), 1);
        assert!(table.put("banana", 20).is_ok());
        assert_eq!(table.len(), 2);

        assert_eq!(table.get("apple"), Ok(&10));
        assert_eq!(table.get("banana"), Ok(&20));
    }

    #[test]
    fn test_get_missing() {
        let table: ChainedTable<i32> = ChainedTable::new(5);
        assert_eq!(table.get("cherry"), Err(TableError::NotFound("cherry".into())));
    }

    #[test]
    fn test_put_overwrites_in_place() {
        let mut table = ChainedTable::new(5);

        table.put("apple", 10).unwrap();
        table.put("apple", 100).unwrap();

        assert_eq!(table.get("apple"), Ok(&100));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_overwrite_within_chain() {
        // All keys land in bucket 0; the overwritten key sits mid-chain.
        let mut table = ChainedTable::with_hasher(5, ConstBuildHasher(0));

        table.put("apple", 10).unwrap();
        table.put("banana", 20).unwrap();
        table.put("grape", 30).unwrap();

        table.put("banana", 200).unwrap();

        assert_eq!(table.get("banana"), Ok(&200));
        assert_eq!(table.len(), 3);
        assert_eq!(chain_lengths(&table), vec![3, 0, 0, 0, 0]);
    }

    #[test]
    fn test_remove_then_get() {
        let mut table = ChainedTable::new(5);

        table.put("apple", 10).unwrap();
        assert!(table.remove("apple"));
        assert_eq!(table.get("apple"), Err(TableError::NotFound("apple".into())));
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_remove_missing_is_a_noop() {
        let mut table = ChainedTable::new(5);

        table.put("apple", 10).unwrap();
        table.put("banana", 20).unwrap();

        assert!(!table.remove("cherry"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("apple"), Ok(&10));
        assert_eq!(table.get("banana"), Ok(&20));

        // Idempotent: a second remove of the same key also misses.
        assert!(table.remove("apple"));
        assert!(!table.remove("apple"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_splices_head_middle_and_tail() {
        let mut table = ChainedTable::with_hasher(5, ConstBuildHasher(0));

        table.put("a", 1).unwrap();
        table.put("b", 2).unwrap();
        table.put("c", 3).unwrap();
        assert_eq!(chain_lengths(&table), vec![3, 0, 0, 0, 0]);

        // Middle of the chain.
        assert!(table.remove("b"));
        assert_eq!(table.get("a"), Ok(&1));
        assert_eq!(table.get("c"), Ok(&3));

        // Head, then tail.
        assert!(table.remove("a"));
        assert_eq!(table.get("c"), Ok(&3));
        assert!(table.remove("c"));

        assert!(table.is_empty());
        assert_eq!(chain_lengths(&table), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_len_matches_chain_lengths() {
        let mut table = ChainedTable::new(5);

        for (key, value) in [
            ("apple", 10),
            ("banana", 20),
            ("grape", 30),
            ("orange", 40),
            ("melon", 50),
            ("peach", 60),
        ] {
            table.put(key, value).unwrap();
        }

        assert_eq!(table.len(), chain_lengths(&table).iter().sum::<usize>());

        table.remove("grape");
        table.remove("peach");
        assert_eq!(table.len(), chain_lengths(&table).iter().sum::<usize>());
    }

    #[test]
    fn test_six_keys_in_five_buckets() {
        // More keys than buckets forces at least one collision; every key
        // must stay retrievable.
        let mut table = ChainedTable::new(5);

        let items = [
            ("apple", 10),
            ("banana", 20),
            ("grape", 30),
            ("orange", 40),
            ("melon", 50),
            ("peach", 60),
        ];

        for (key, value) in items {
            table.put(key, value).unwrap();
        }

        assert_eq!(table.len(), 6);
        for (key, value) in items {
            assert_eq!(table.get(key), Ok(&value));
        }
    }

    #[test]
    fn test_empty_key_rejected() {
        let mut table = ChainedTable::new(5);

        assert_eq!(table.put("", 1), Err(TableError::InvalidKey));
        assert_eq!(table.get(""), Err(TableError::InvalidKey));
        assert!(!table.remove(""));
        assert!(table.is_empty());
    }

    #[test]
    #[should_panic(expected = "capacity must be greater than zero")]
    fn test_zero_capacity_panics() {
        let _table: ChainedTable<i32> = ChainedTable::new(0);
    }

    #[test]
    fn test_default_capacity() {
        let table: ChainedTable<i32> = ChainedTable::default();
        assert_eq!(table.capacity(), 10);
    }

    #[test]
    fn test_load_factor_can_exceed_one() {
        let mut table = ChainedTable::with_hasher(2, ConstBuildHasher(0));

        table.put("a", 1).unwrap();
        table.put("b", 2).unwrap();
        table.put("c", 3).unwrap();

        assert_eq!(table.load_factor(), 1.5);
    }

    #[test]
    fn test_display() {
        let mut table = ChainedTable::with_hasher(3, ConstBuildHasher(1));

        table.put("apple", 10).unwrap();
        table.put("banana", 20).unwrap();

        let rendered = table.to_string();

        assert!(rendered.contains("bucket 0: empty"));
        assert!(rendered.contains("bucket 1: (apple: 10) -> (banana: 20)"));
        assert!(rendered.contains("bucket 2: empty"));
        assert!(rendered.contains("total items: 2"));
        assert!(rendered.contains("load factor: 0.67"));
    }

    #[test]
    fn test_debug_print() {
        let mut table = ChainedTable::with_hasher(3, ConstBuildHasher(0));
        let empty: ChainedTable<i32> = ChainedTable::new(3);

        table.put("apple", 10).unwrap();
        table.put("banana", 20).unwrap();

        assert_eq!(
            format!("{table:?}"),
            "{\"apple\": 10, \"banana\": 20}"
        );
        assert_eq!(format!("{empty:?}"), "{}");
    }

    #[quickcheck]
    fn prop_last_write_wins(ops: Vec<(String, u16)>) -> bool {
        let mut table = ChainedTable::new(7);
        let mut model = HashMap::new();

        for (key, value) in &ops {
            if key.is_empty() {
                continue;
            }
            table.put(key, *value).unwrap();
            model.insert(key.clone(), *value);
        }

        table.len() == model.len()
            && model.iter().all(|(key, value)| table.get(key) == Ok(value))
    }

    #[quickcheck]
    fn prop_remove_all_empties_the_table(ops: Vec<(String, u16)>) -> bool {
        let mut table = ChainedTable::new(7);
        let mut model = HashMap::new();

        for (key, value) in &ops {
            if key.is_empty() {
                continue;
            }
            table.put(key, *value).unwrap();
            model.insert(key.clone(), *value);
        }

        for key in model.keys() {
            if !table.remove(key) {
                return false;
            }
        }

        table.is_empty() && model.keys().all(|key| !table.contains_key(key))
    }
}
