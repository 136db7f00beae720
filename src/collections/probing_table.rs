//! Fixed-capacity [hash table] resolving collisions by linear probing.
//!
//! Entries live in a flat array of slots. A key's home index is its hash
//! reduced modulo the capacity; on collision the table scans forward one
//! slot at a time, wrapping at the end of the array, until it finds room.
//! Removal leaves a tombstone in place of the entry so that probe
//! sequences passing through the slot remain unbroken.
//!
//! The table never resizes. Once `capacity` entries are live, inserting a
//! new key fails with [`TableError::TableFull`] until something is
//! removed.
//!
//! [hash table]: https://en.wikipedia.org/wiki/Hash_table

use core::fmt;
use core::hash::BuildHasher;

use log::debug;

use crate::collections::fnv::FnvBuildHasher;
use crate::error::TableError;

/// Default slot count when none is specified.
const DEFAULT_CAPACITY: usize = 10;

/// The state of a single slot.
///
/// A slot moves `Empty -> Occupied` on insert, `Occupied -> Tombstone` on
/// remove, and `Tombstone -> Occupied` when a later probe sequence reuses
/// it. `Empty` terminates a lookup scan; `Tombstone` does not, since a
/// live entry with the same home index may sit further along.
enum Slot<V> {
    Empty,
    Tombstone,
    Occupied { key: String, value: V },
}

/// Fixed-capacity [hash table] resolving collisions by linear probing.
///
/// Keys are non-empty strings. The hasher defaults to [`FnvBuildHasher`]
/// so that home indices are reproducible across runs.
///
/// # Examples
///
/// ```
/// use hashtab::prelude::*;
///
/// let mut table = ProbingTable::new(5);
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
pub struct ProbingTable<V, H = FnvBuildHasher> {
    /// Flat slot array; collision resolution probes it with wraparound.
    slots: Vec<Slot<V>>,
    /// Number of live entries. Tombstones are not counted.
    len: usize,
    /// Builds the hasher for per-key hashing.
    build_hasher: H,
}

impl<V> ProbingTable<V> {
    /// Creates an empty `ProbingTable` with the given slot count.
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
    /// let table: ProbingTable<i32> = ProbingTable::new(5);
    /// assert_eq!(table.capacity(), 5);
    /// assert!(table.is_empty());
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, FnvBuildHasher {})
    }
}

impl<V, H: BuildHasher> ProbingTable<V, H> {
    /// Creates an empty `ProbingTable` which will use the given hash
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
    /// let mut table = ProbingTable::with_hasher(5, RandomState::new());
    /// table.put("apple", 10).unwrap();
    /// ```
    pub fn with_hasher(capacity: usize, build_hasher: H) -> Self {
        assert!(capacity > 0, "capacity must be greater than zero");

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || Slot::Empty);

        Self {
            slots,
            len: 0,
            build_hasher,
        }
    }

    /// Inserts a key-value pair into the table.
    ///
    /// Probes forward from the key's home index with wraparound. A live
    /// entry with a matching key is overwritten in place and the size does
    /// not change. Otherwise the new entry takes the first tombstoned slot
    /// seen along the probe sequence, or the empty slot that ended it. The
    /// scan does not stop at a tombstone: a live entry for the same key
    /// could sit further along, and inserting early would leave the key in
    /// two slots at once.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidKey`] if `key` is empty, and
    /// [`TableError::TableFull`] when `len() >= capacity()` or when every
    /// slot has been probed without finding room. The capacity check is
    /// deliberately blunt: it runs before the probe, so once the table is
    /// full even an overwrite of a live key is refused until something is
    /// removed. It counts live entries only, so a table whose free space
    /// consists entirely of tombstones still accepts inserts. The table
    /// is unchanged on any error.
    ///
    /// # Time Complexity
    ///
    /// Takes average *O*(1) time. Worst case is *O*(*capacity*) when the
    /// probe sequence visits every slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ProbingTable::new(2);
    ///
    /// table.put("apple", 10).unwrap();
    /// table.put("banana", 20).unwrap();
    ///
    /// // Two live entries fill the table; a third key is refused.
    /// assert_eq!(
    ///     table.put("cherry", 30),
    ///     Err(TableError::TableFull { capacity: 2, size: 2 })
    /// );
    ///
    /// // The check runs before the probe, so updates are refused too
    /// // while the table is full; remove something first.
    /// assert!(table.remove("banana"));
    /// table.put("apple", 100).unwrap();
    /// assert_eq!(table.get("apple"), Ok(&100));
    /// ```
    pub fn put(&mut self, key: &str, value: V) -> Result<(), TableError> {
        if key.is_empty() {
            return Err(TableError::InvalidKey);
        }

        if self.len >= self.capacity() {
            return Err(TableError::TableFull {
                capacity: self.capacity(),
                size: self.len,
            });
        }

        let home = self.home_index(key);
        let mut index = home;
        let mut first_tombstone = None;

        for probed in 0..self.slots.len() {
            match &mut self.slots[index] {
                Slot::Occupied { key: k, value: v } if k.as_str() == key => {
                    *v = value;
                    debug!("updated '{key}' at index {index}");
                    return Ok(());
                }
                Slot::Occupied { .. } => {}
                Slot::Tombstone => {
                    if first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                }
                Slot::Empty => {
                    // The key is confirmed absent. Prefer reusing a
                    // tombstone seen earlier in the probe sequence.
                    let target = first_tombstone.unwrap_or(index);
                    self.slots[target] = Slot::Occupied {
                        key: key.to_owned(),
                        value,
                    };
                    self.len += 1;
                    debug!("stored '{key}' at index {target} (probed {probed} times)");
                    return Ok(());
                }
            }

            index = (index + 1) % self.slots.len();
        }

        // The probe came back around to the home index. With the live
        // count below capacity this can only mean the remaining space is
        // tombstones.
        if let Some(target) = first_tombstone {
            self.slots[target] = Slot::Occupied {
                key: key.to_owned(),
                value,
            };
            self.len += 1;
            debug!("stored '{key}' at index {target} (reused tombstone)");
            return Ok(());
        }

        Err(TableError::TableFull {
            capacity: self.capacity(),
            size: self.len,
        })
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// Probes forward from the key's home index with wraparound. The scan
    /// continues past tombstones and non-matching live entries, and stops
    /// at the first empty slot or after visiting every slot.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidKey`] if `key` is empty, and
    /// [`TableError::NotFound`] if the scan terminates without a match.
    ///
    /// # Time Complexity
    ///
    /// Takes average *O*(1) time. Worst case is *O*(*capacity*) when the
    /// probe sequence visits every slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ProbingTable::new(5);
    /// table.put("apple", 10).unwrap();
    ///
    /// assert_eq!(table.get("apple"), Ok(&10));
    /// assert_eq!(table.get("cherry"), Err(TableError::NotFound("cherry".into())));
    /// ```
    pub fn get(&self, key: &str) -> Result<&V, TableError> {
        if key.is_empty() {
            return Err(TableError::InvalidKey);
        }

        let mut index = self.home_index(key);

        for _ in 0..self.slots.len() {
            match &self.slots[index] {
                Slot::Occupied { key: k, value } if k == key => return Ok(value),
                Slot::Occupied { .. } | Slot::Tombstone => {}
                Slot::Empty => break,
            }

            index = (index + 1) % self.slots.len();
        }

        Err(TableError::NotFound(key.to_owned()))
    }

    /// Removes a key from the table, returning whether an entry was found
    /// and removed.
    ///
    /// Probes exactly as [`get`] does. A match is tombstoned rather than
    /// cleared, so probe sequences for other keys that pass through the
    /// slot stay intact. Removing an absent key returns `false` and leaves
    /// the table unchanged; an empty key can never be stored, so it is a
    /// plain miss.
    ///
    /// # Time Complexity
    ///
    /// Takes average *O*(1) time. Worst case is *O*(*capacity*) when the
    /// probe sequence visits every slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ProbingTable::new(5);
    /// table.put("apple", 10).unwrap();
    ///
    /// assert!(table.remove("apple"));
    /// assert!(!table.remove("apple"));
    /// assert!(table.is_empty());
    /// ```
    ///
    /// [`get`]: ProbingTable::get
    pub fn remove(&mut self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }

        let mut index = self.home_index(key);

        for _ in 0..self.slots.len() {
            match &self.slots[index] {
                Slot::Occupied { key: k, .. } if k == key => {
                    self.slots[index] = Slot::Tombstone;
                    self.len -= 1;
                    debug!("removed '{key}' from index {index}");
                    return true;
                }
                Slot::Occupied { .. } | Slot::Tombstone => {}
                Slot::Empty => return false,
            }

            index = (index + 1) % self.slots.len();
        }

        false
    }

    /// Returns `true` if the table contains a live entry for the
    /// specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ProbingTable::new(5);
    /// table.put("apple", 10).unwrap();
    ///
    /// assert!(table.contains_key("apple"));
    /// assert!(!table.contains_key("cherry"));
    /// ```
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Returns the number of live entries in the table. Tombstoned slots
    /// are not counted, though they still occupy physical slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table contains no live entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the table. Fixed for the table's
    /// lifetime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the ratio of live entries to slots. Never exceeds 1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashtab::prelude::*;
    ///
    /// let mut table = ProbingTable::new(4);
    /// table.put("apple", 10).unwrap();
    ///
    /// assert_eq!(table.load_factor(), 0.25);
    /// ```
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Returns the slot index the key hashes to, before any collision
    /// resolution.
    #[inline]
    fn home_index(&self, key: &str) -> usize {
        (self.build_hasher.hash_one(key) % self.slots.len() as u64) as usize
    }
}

impl<V> Default for ProbingTable<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl<V, H> fmt::Display for ProbingTable<V, H>
where
    V: fmt::Display,
{
    /// Renders every slot's state, one line per slot, followed by the
    /// live entry count.
    ///
    /// Diagnostic output only; the format is not a stable contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Empty => writeln!(f, "index {i}: [empty]")?,
                Slot::Tombstone => writeln!(f, "index {i}: [deleted]")?,
                Slot::Occupied { key, value } => writeln!(f, "index {i}: {key} -> {value}")?,
            }
        }

        write!(f, "total items: {}", self.len)
    }
}

impl<V, H> fmt::Debug for ProbingTable<V, H>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for slot in &self.slots {
            if let Slot::Occupied { key, value } = slot {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}
