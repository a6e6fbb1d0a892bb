//! Type definitions for occurrence tallies

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Count-per-key mapping that remembers first-seen order
///
/// Equality compares counts only, as for a multiset: two tallies built from
/// the same occurrences in a different order are equal.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, u64)>,
    total: u64,
}

/// Occurrences per Unicode scalar value
pub type CharacterTally = Tally<char>;

/// Occurrences per word
pub type WordTally = Tally<String>;

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Tally {
            index: HashMap::new(),
            entries: Vec::new(),
            total: 0,
        }
    }
}

impl<K> Tally<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key`
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Record `count` occurrences of `key`
    pub fn add(&mut self, key: K, count: u64) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, count));
            }
        }
        self.total += count;
    }

    /// Occurrences of `key`, zero when never seen
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(0)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// Fold another tally into this one
    ///
    /// Counts add up, so merge order never changes the resulting counts.
    /// Keys new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: &Tally<K>) {
        for (key, count) in other.iter() {
            self.add(key.clone(), count);
        }
    }
}

impl<K> PartialEq for Tally<K>
where
    K: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total
            && self.len() == other.len()
            && self.iter().all(|(key, count)| other.get(key) == count)
    }
}

impl<K> Eq for Tally<K> where K: Eq + Hash + Clone {}

impl<K> FromIterator<K> for Tally<K>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.increment(key);
        }
        tally
    }
}

/// Character and word tallies for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tallies {
    pub characters: CharacterTally,
    pub words: WordTally,
}

impl Tallies {
    pub fn merge(&mut self, other: &Tallies) {
        self.characters.merge(&other.characters);
        self.words.merge(&other.words);
    }

    pub fn is_empty(&self) -> bool {
        self.characters.total() == 0 && self.words.total() == 0
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
