//! Keyed fragment tables with a guaranteed fallback entry.

use std::collections::BTreeMap;

use crate::catalog::CatalogError;

/// Look up `key`, falling back to `fallback_key` when it is absent.
///
/// # Panics
///
/// Panics if `fallback_key` itself is missing. Tables built through
/// [`FragmentTable::new`] always contain their fallback, so this only fires
/// on a raw map that was never validated.
pub fn resolve<'a, R>(entries: &'a BTreeMap<String, R>, key: &str, fallback_key: &str) -> &'a R {
    match entries.get(key) {
        Some(record) => record,
        None => match entries.get(fallback_key) {
            Some(record) => record,
            None => panic!("fallback key '{}' missing from fragment table", fallback_key),
        },
    }
}

/// A category table: key to record, plus the key used for unknown lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentTable<R> {
    category: &'static str,
    fallback: String,
    entries: BTreeMap<String, R>,
}

impl<R> FragmentTable<R> {
    /// Build a table, rejecting it if the fallback key is not present.
    pub fn new(
        category: &'static str,
        entries: BTreeMap<String, R>,
        fallback: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let fallback = fallback.into();
        if !entries.contains_key(&fallback) {
            return Err(CatalogError::MissingFallback {
                category: category.to_string(),
                key: fallback,
            });
        }
        Ok(Self {
            category,
            fallback,
            entries,
        })
    }

    /// Category name of this table.
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// Key used when a lookup misses.
    pub fn fallback_key(&self) -> &str {
        &self.fallback
    }

    /// The record for `key`, or the fallback record.
    pub fn resolve(&self, key: &str) -> &R {
        self.resolve_entry(key).1
    }

    /// Like [`Self::resolve`], but also returns the key that was actually used.
    pub fn resolve_entry(&self, key: &str) -> (&str, &R) {
        match self.entries.get_key_value(key) {
            Some((found, record)) => (found.as_str(), record),
            None => {
                log::debug!(
                    "{} '{}' not found, falling back to '{}'",
                    self.category,
                    key,
                    self.fallback
                );
                (
                    self.fallback.as_str(),
                    resolve(&self.entries, &self.fallback, &self.fallback),
                )
            }
        }
    }

    /// Exact lookup without fallback.
    pub fn get(&self, key: &str) -> Option<&R> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
