//! Resolution of free-text city/country queries to timezone identifiers.

use chrono_tz::Tz;
use log::debug;
use thiserror::Error;

use crate::timezones::REFERENCE_ZONES;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no timezone matches \"{query}\"")]
    NotFound { query: String },
    #[error("\"{name}\" is not a recognized timezone identifier")]
    Unrecognized { name: String },
}

/// Resolves queries against an ordered, immutable list of zone identifiers.
///
/// Matching is case-insensitive substring, first entry wins. The list is
/// injected at construction so tests can run against a small fixture
/// instead of the bundled data.
pub struct ZoneResolver {
    zones: Vec<String>,
}

impl ZoneResolver {
    pub fn new(zones: Vec<String>) -> Self {
        Self { zones }
    }

    /// Resolver over the bundled reference list.
    pub fn bundled() -> Self {
        Self::new(REFERENCE_ZONES.clone())
    }

    /// First list entry containing `query` as a case-insensitive substring.
    ///
    /// Note an empty query trivially matches the first entry; callers that
    /// take user input should trim and skip empty strings.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        let needle = query.to_lowercase();
        self.zones
            .iter()
            .find(|zone| zone.to_lowercase().contains(&needle))
            .map(String::as_str)
    }

    /// All entries matching `query`, in list order. Lets callers detect
    /// ambiguous fragments (`resolve` picks the first of these).
    pub fn candidates(&self, query: &str) -> Vec<&str> {
        let needle = query.to_lowercase();
        self.zones
            .iter()
            .filter(|zone| zone.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Resolve a batch of queries, preserving input order.
    ///
    /// Fails on the first query that matches nothing; no partial results
    /// are returned. The error names the offending query.
    pub fn resolve_zones<S: AsRef<str>>(&self, queries: &[S]) -> Result<Vec<Tz>, ResolveError> {
        let mut resolved = Vec::with_capacity(queries.len());
        for query in queries {
            let query = query.as_ref();
            let name = self
                .resolve(query)
                .ok_or_else(|| ResolveError::NotFound { query: query.to_string() })?;
            let tz: Tz = name
                .parse()
                .map_err(|_| ResolveError::Unrecognized { name: name.to_string() })?;
            debug!("Resolved \"{}\" to {}", query, name);
            resolved.push(tz);
        }
        Ok(resolved)
    }
}

impl Default for ZoneResolver {
    fn default() -> Self {
        Self::bundled()
    }
}
