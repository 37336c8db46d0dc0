//! Host version discovery.
//!
//! The hosting runtime publishes its version-specific internals under a
//! namespace whose suffix encodes a version triple, e.g.
//! `host.internal.v1_20_R1`. [`VersionProber`] finds the one the running
//! host actually exposes by probing candidates in ascending order and
//! testing a known marker symbol, then memoizes the winner for the rest
//! of the process.

use crate::error::ProbeError;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One `(major, minor, revision)` candidate in the search space.
///
/// Displays as the namespace suffix it stands for, e.g. `v1_20_R1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HostVersion {
    /// First number of the triple
    pub major: u32,
    /// Second number of the triple
    pub minor: u32,
    /// Final number, preceded by an `R` in the rendered form
    pub revision: u32,
}

impl HostVersion {
    /// Creates a version triple.
    pub fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }
}

impl std::fmt::Display for HostVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}_{}_R{}", self.major, self.minor, self.revision)
    }
}

/// Resolve-by-name access to the host's hierarchical namespace registry.
///
/// The host must answer deterministically within a process: a namespace
/// that resolves once keeps resolving, and one that does not exist never
/// starts to.
pub trait NamespaceRegistry {
    /// Returns whether `symbol` exists inside `namespace`.
    ///
    /// A missing namespace or symbol is an ordinary negative answer, not
    /// an error.
    fn resolve(&self, namespace: &str, symbol: &str) -> bool;
}

impl<F> NamespaceRegistry for F
where
    F: Fn(&str, &str) -> bool,
{
    fn resolve(&self, namespace: &str, symbol: &str) -> bool {
        self(namespace, symbol)
    }
}

/// Search-space bounds and naming scheme for the prober.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Namespace prefix the candidates are synthesized under
    pub base_path: String,
    /// Symbol whose presence inside a candidate namespace proves that
    /// namespace is the active one
    pub marker_symbol: String,
    /// Smallest major version probed
    pub major_min: u32,
    /// Largest major version probed
    pub major_max: u32,
    /// Smallest minor version probed
    pub minor_min: u32,
    /// Largest minor version probed
    pub minor_max: u32,
    /// Largest revision probed. Revisions always start at 1, so there is
    /// no matching minimum.
    pub revision_max: u32,
}

impl ProbeConfig {
    /// Smallest major version in the validated range
    pub const MAJOR_MIN: u32 = 1;
    /// Largest major version in the validated range
    pub const MAJOR_MAX: u32 = 1;
    /// Smallest minor version in the validated range
    pub const MINOR_MIN: u32 = 9;
    /// Largest minor version in the validated range
    pub const MINOR_MAX: u32 = 100;
    /// Largest revision in the validated range
    pub const REVISION_MAX: u32 = 10;

    /// Creates a config over the validated version range for the given
    /// namespace prefix and marker symbol.
    pub fn new(base_path: impl Into<String>, marker_symbol: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            marker_symbol: marker_symbol.into(),
            major_min: Self::MAJOR_MIN,
            major_max: Self::MAJOR_MAX,
            minor_min: Self::MINOR_MIN,
            minor_max: Self::MINOR_MAX,
            revision_max: Self::REVISION_MAX,
        }
    }

    fn smallest(&self) -> HostVersion {
        HostVersion::new(self.major_min, self.minor_min, 1)
    }

    fn largest(&self) -> HostVersion {
        HostVersion::new(self.major_max, self.minor_max, self.revision_max)
    }
}

/// Single-slot, write-once store for the discovered namespace.
///
/// The slot is owned by whoever owns the prober, so tests and embedders
/// control its lifetime explicitly; there is no process-global state.
/// Once a value lands in the slot it is never replaced.
#[derive(Debug, Default)]
pub struct ProbeCache {
    slot: OnceCell<String>,
}

impl ProbeCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// Returns the cached namespace, if one has been discovered.
    pub fn get(&self) -> Option<&str> {
        self.slot.get().map(String::as_str)
    }

    /// Stores `namespace` if the slot is still empty and returns whatever
    /// the slot holds afterwards. Under a concurrent first scan the first
    /// store wins and every caller observes the winning value.
    pub fn store(&self, namespace: String) -> &str {
        self.slot.get_or_init(|| namespace)
    }
}

/// Discovers which version-suffixed namespace the running host exposes.
///
/// The search is bounded and deterministic: candidates are tried major
/// ascending, then minor ascending, then revision ascending from 1, and
/// the first candidate whose marker symbol resolves wins. The winner is
/// memoized in the prober's [`ProbeCache`], so every later call answers
/// without touching the registry. An exhausted search is an error and is
/// not memoized; the next call searches again.
///
/// # Examples
///
/// ```rust
/// use plugin_toolkit::{ProbeConfig, VersionProber};
///
/// let prober = VersionProber::new(ProbeConfig::new("host.internal", "Marker"));
/// let registry = |namespace: &str, symbol: &str| {
///     namespace == "host.internal.v1_20_R1" && symbol == "Marker"
/// };
///
/// let namespace = prober.scan(&registry, false)?;
/// assert_eq!(namespace, "host.internal.v1_20_R1");
/// # Ok::<(), plugin_toolkit::ProbeError>(())
/// ```
#[derive(Debug)]
pub struct VersionProber {
    config: ProbeConfig,
    cache: ProbeCache,
}

impl VersionProber {
    /// Creates a prober with a fresh, empty cache.
    pub fn new(config: ProbeConfig) -> Self {
        Self::with_cache(config, ProbeCache::new())
    }

    /// Creates a prober around a cache the embedder owns, which may
    /// already hold a previously discovered namespace.
    pub fn with_cache(config: ProbeConfig, cache: ProbeCache) -> Self {
        Self { config, cache }
    }

    /// The search bounds this prober was built with.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// The cache slot backing this prober.
    pub fn cache(&self) -> &ProbeCache {
        &self.cache
    }

    /// Scans the candidate space for the namespace the host exposes.
    ///
    /// Returns the cached namespace immediately when a previous scan has
    /// succeeded, performing no registry lookups. With `logging` enabled,
    /// each candidate's outcome is reported through the logging sink.
    ///
    /// # Errors
    ///
    /// [`ProbeError::UnsupportedHostVersion`] when no candidate in the
    /// configured range resolves the marker symbol. Failures are never
    /// cached, so the next call repeats the full search.
    pub fn scan<R>(&self, registry: &R, logging: bool) -> Result<String, ProbeError>
    where
        R: NamespaceRegistry + ?Sized,
    {
        if let Some(found) = self.cache.get() {
            return Ok(found.to_owned());
        }

        for major in self.config.major_min..=self.config.major_max {
            for minor in self.config.minor_min..=self.config.minor_max {
                // Revisions always start at 1
                for revision in 1..=self.config.revision_max {
                    let candidate = HostVersion::new(major, minor, revision);
                    let namespace = format!("{}.{}", self.config.base_path, candidate);

                    if registry.resolve(&namespace, &self.config.marker_symbol) {
                        if logging {
                            info!("✅ Found host namespace: {}", candidate);
                        }

                        return Ok(self.cache.store(namespace).to_owned());
                    }

                    if logging {
                        warn!(
                            "Tried host namespace {} but it does not exist. Continuing.",
                            candidate
                        );
                    }
                }
            }
        }

        Err(ProbeError::UnsupportedHostVersion {
            base_path: self.config.base_path.clone(),
            smallest: self.config.smallest(),
            largest: self.config.largest(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Registry double that records every lookup in order.
    struct RecordingRegistry {
        lookups: Mutex<Vec<String>>,
        present: Option<String>,
    }

    impl RecordingRegistry {
        fn with_namespace(namespace: &str) -> Self {
            Self {
                lookups: Mutex::new(Vec::new()),
                present: Some(namespace.to_string()),
            }
        }

        fn empty() -> Self {
            Self {
                lookups: Mutex::new(Vec::new()),
                present: None,
            }
        }

        fn lookup_count(&self) -> usize {
            self.lookups.lock().unwrap().len()
        }
    }

    impl NamespaceRegistry for RecordingRegistry {
        fn resolve(&self, namespace: &str, _symbol: &str) -> bool {
            self.lookups.lock().unwrap().push(namespace.to_string());
            self.present.as_deref() == Some(namespace)
        }
    }

    fn small_config() -> ProbeConfig {
        ProbeConfig {
            base_path: "host.internal".to_string(),
            marker_symbol: "Marker".to_string(),
            major_min: 1,
            major_max: 2,
            minor_min: 1,
            minor_max: 2,
            revision_max: 2,
        }
    }

    #[test]
    fn finds_the_single_matching_candidate() {
        let prober = VersionProber::new(small_config());
        let registry = RecordingRegistry::with_namespace("host.internal.v2_1_R2");

        let found = prober.scan(&registry, false).unwrap();
        assert_eq!(found, "host.internal.v2_1_R2");
    }

    #[test]
    fn second_scan_answers_from_cache_without_lookups() {
        let prober = VersionProber::new(small_config());
        let registry = RecordingRegistry::with_namespace("host.internal.v1_2_R1");

        let first = prober.scan(&registry, false).unwrap();
        let lookups_after_first = registry.lookup_count();
        let second = prober.scan(&registry, false).unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.lookup_count(), lookups_after_first);
    }

    #[test]
    fn exhausted_search_fails_and_is_retried() {
        let prober = VersionProber::new(small_config());
        let registry = RecordingRegistry::empty();

        let err = prober.scan(&registry, false).unwrap_err();
        assert!(matches!(err, ProbeError::UnsupportedHostVersion { .. }));
        assert_eq!(registry.lookup_count(), 8);

        // A failure is not cached: the next scan walks the whole space again
        prober.scan(&registry, false).unwrap_err();
        assert_eq!(registry.lookup_count(), 16);
    }

    #[test]
    fn candidates_are_probed_in_lexicographic_order() {
        let prober = VersionProber::new(small_config());
        let registry = RecordingRegistry::empty();

        prober.scan(&registry, false).unwrap_err();

        let lookups = registry.lookups.lock().unwrap();
        let expected: Vec<String> = [
            "v1_1_R1", "v1_1_R2", "v1_2_R1", "v1_2_R2", "v2_1_R1", "v2_1_R2", "v2_2_R1", "v2_2_R2",
        ]
        .iter()
        .map(|suffix| format!("host.internal.{}", suffix))
        .collect();
        assert_eq!(*lookups, expected);
    }

    #[test]
    fn error_message_names_the_attempted_range() {
        let prober = VersionProber::new(small_config());
        let err = prober.scan(&RecordingRegistry::empty(), false).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("host.internal"));
        assert!(message.contains("v1_1_R1"));
        assert!(message.contains("v2_2_R2"));
    }

    #[test]
    fn logging_scan_probes_the_same_space() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let prober = VersionProber::new(small_config());
        let registry = RecordingRegistry::with_namespace("host.internal.v1_1_R2");

        assert_eq!(
            prober.scan(&registry, true).unwrap(),
            "host.internal.v1_1_R2"
        );
        assert_eq!(registry.lookup_count(), 2);
    }

    #[test]
    fn closure_registries_are_accepted() {
        let prober = VersionProber::new(small_config());
        let registry =
            |namespace: &str, symbol: &str| namespace == "host.internal.v1_2_R2" && symbol == "Marker";

        assert_eq!(
            prober.scan(&registry, false).unwrap(),
            "host.internal.v1_2_R2"
        );
    }

    #[test]
    fn preseeded_cache_skips_the_search_entirely() {
        let cache = ProbeCache::new();
        cache.store("host.internal.v1_1_R1".to_string());

        let prober = VersionProber::with_cache(small_config(), cache);
        let registry = RecordingRegistry::empty();

        assert_eq!(
            prober.scan(&registry, false).unwrap(),
            "host.internal.v1_1_R1"
        );
        assert_eq!(registry.lookup_count(), 0);
    }

    #[test]
    fn cache_keeps_the_first_stored_value() {
        let cache = ProbeCache::new();
        assert_eq!(cache.store("first".to_string()), "first");
        assert_eq!(cache.store("second".to_string()), "first");
        assert_eq!(cache.get(), Some("first"));
    }
}
