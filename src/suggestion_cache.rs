// ABOUTME: Bounded in-memory cache for AI-suggestion responses with TTL expiry
// ABOUTME: Explicit key-value cache with expiry-on-read and oldest-first eviction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Suggestion response cache
//!
//! The recipe/chat collaborator proxies an external AI service and caches
//! responses keyed by a request fingerprint so repeated identical prompts
//! skip the upstream call. The cache is an explicit bounded key-value store,
//! never a process-global: entries expire on read, eviction removes the
//! oldest entries first, and the clock is injected so expiry is
//! deterministic under test.

use chrono::{DateTime, Duration, Utc};
use routineforge_engine::clock::{Clock, SystemClock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

// ============================================================================
// Constants
// ============================================================================

/// Default cache TTL in minutes
const DEFAULT_CACHE_TTL_MINUTES: i64 = 15;

/// Maximum total cache entries
const MAX_TOTAL_ENTRIES: usize = 1000;

// ============================================================================
// Cache Entry
// ============================================================================

/// Internal cache entry wrapping a response with metadata
#[derive(Debug, Clone)]
struct CacheEntry {
    response: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    access_count: u32,
}

impl CacheEntry {
    fn new(response: String, now: DateTime<Utc>, ttl_minutes: i64) -> Self {
        Self {
            response,
            created_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
            access_count: 0,
        }
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

// ============================================================================
// Suggestion Cache
// ============================================================================

/// Configuration for the suggestion cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionCacheConfig {
    /// TTL for cache entries in minutes
    pub ttl_minutes: i64,
    /// Maximum total entries
    pub max_entries: usize,
}

impl Default for SuggestionCacheConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_CACHE_TTL_MINUTES,
            max_entries: MAX_TOTAL_ENTRIES,
        }
    }
}

/// Thread-safe bounded cache for suggestion responses
///
/// Safe to share across threads via `Arc`; a poisoned lock degrades to a
/// cache miss rather than an error, the cache being non-critical.
pub struct SuggestionCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    config: SuggestionCacheConfig,
    clock: Arc<dyn Clock>,
}

impl SuggestionCache {
    /// Create a cache with default configuration and the system clock
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SuggestionCacheConfig::default())
    }

    /// Create a cache with custom configuration and the system clock
    #[must_use]
    pub fn with_config(config: SuggestionCacheConfig) -> Self {
        Self::with_config_and_clock(config, Arc::new(SystemClock))
    }

    /// Create a cache with custom configuration and an injected clock
    #[must_use]
    pub fn with_config_and_clock(config: SuggestionCacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            config,
            clock,
        }
    }

    /// Insert a response under a request fingerprint
    ///
    /// Expired entries are swept first; if the cache is still at capacity the
    /// oldest entries are evicted. Silently skipped if the lock is poisoned.
    pub fn insert(&self, fingerprint: impl Into<String>, response: impl Into<String>) {
        let now = self.clock.now_utc();

        let Ok(mut entries) = self.entries.write() else {
            return;
        };

        entries.retain(|_, e| !e.is_expired(now));

        while entries.len() >= self.config.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, e)| e.created_at)
                .map(|(k, _)| k.clone());
            match oldest {
                Some(key) => {
                    entries.remove(&key);
                }
                None => break,
            }
        }

        entries.insert(
            fingerprint.into(),
            CacheEntry::new(response.into(), now, self.config.ttl_minutes),
        );
    }

    /// Look up a response by request fingerprint
    ///
    /// Expiry-on-read: an expired entry is removed and reads as a miss.
    /// Returns `None` if the lock is poisoned.
    #[must_use]
    pub fn get(&self, fingerprint: &str) -> Option<String> {
        let now = self.clock.now_utc();

        let Ok(mut entries) = self.entries.write() else {
            return None;
        };

        match entries.get_mut(fingerprint) {
            Some(entry) if entry.is_expired(now) => {
                entries.remove(fingerprint);
                None
            }
            Some(entry) => {
                entry.access_count = entry.access_count.saturating_add(1);
                Some(entry.response.clone())
            }
            None => None,
        }
    }

    /// Remove a specific fingerprint
    ///
    /// Silently skipped if the lock is poisoned.
    pub fn invalidate(&self, fingerprint: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(fingerprint);
        }
    }

    /// Clear all expired entries
    ///
    /// Silently skipped if the lock is poisoned.
    pub fn cleanup_expired(&self) {
        let now = self.clock.now_utc();
        if let Ok(mut entries) = self.entries.write() {
            entries.retain(|_, e| !e.is_expired(now));
        }
    }

    /// Get cache statistics
    ///
    /// Returns zeroed stats if the lock is poisoned.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now_utc();

        let Ok(entries) = self.entries.read() else {
            return CacheStats {
                total_entries: 0,
                expired_count: 0,
                max_entries: self.config.max_entries,
            };
        };

        CacheStats {
            total_entries: entries.len(),
            expired_count: entries.values().filter(|e| e.is_expired(now)).count(),
            max_entries: self.config.max_entries,
        }
    }

    /// Clear the entire cache
    ///
    /// Silently skipped if the lock is poisoned.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl Default for SuggestionCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    /// Total number of entries
    pub total_entries: usize,
    /// Number of expired entries (pending cleanup)
    pub expired_count: usize,
    /// Maximum allowed entries
    pub max_entries: usize,
}

/// Thread-safe handle to a suggestion cache
pub type SharedSuggestionCache = Arc<SuggestionCache>;

/// Create a new shared cache with default configuration
#[must_use]
pub fn create_shared_cache() -> SharedSuggestionCache {
    Arc::new(SuggestionCache::new())
}
