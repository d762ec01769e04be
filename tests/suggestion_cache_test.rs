// ABOUTME: Tests for the bounded suggestion cache: TTL expiry-on-read and oldest-first eviction
// ABOUTME: Uses an adjustable injected clock so expiry is deterministic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use routineforge::engine::clock::Clock;
use routineforge::suggestion_cache::{SuggestionCache, SuggestionCacheConfig};
use std::sync::{Arc, Mutex};

/// Test clock whose instant can be advanced between cache operations
struct AdjustableClock {
    instant: Mutex<DateTime<Utc>>,
}

impl AdjustableClock {
    fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Mutex::new(instant),
        }
    }

    fn advance_minutes(&self, minutes: i64) {
        let mut instant = self.instant.lock().unwrap();
        *instant += Duration::minutes(minutes);
    }
}

impl Clock for AdjustableClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap()
    }
}

fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, 0).unwrap()
}

#[test]
fn test_hit_within_ttl_then_expiry_on_read() {
    let clock = Arc::new(AdjustableClock::new(start_instant()));
    let cache = SuggestionCache::with_config_and_clock(
        SuggestionCacheConfig {
            ttl_minutes: 15,
            max_entries: 100,
        },
        clock.clone(),
    );

    cache.insert("fingerprint-a", "cached response");
    assert_eq!(cache.get("fingerprint-a").as_deref(), Some("cached response"));

    clock.advance_minutes(14);
    assert!(cache.get("fingerprint-a").is_some());

    clock.advance_minutes(2);
    assert_eq!(cache.get("fingerprint-a"), None);

    // Expiry-on-read removed the entry entirely
    assert_eq!(cache.stats().total_entries, 0);
}

#[test]
fn test_eviction_removes_oldest_first() {
    let clock = Arc::new(AdjustableClock::new(start_instant()));
    let cache = SuggestionCache::with_config_and_clock(
        SuggestionCacheConfig {
            ttl_minutes: 60,
            max_entries: 2,
        },
        clock.clone(),
    );

    cache.insert("oldest", "one");
    clock.advance_minutes(1);
    cache.insert("middle", "two");
    clock.advance_minutes(1);
    cache.insert("newest", "three");

    assert_eq!(cache.get("oldest"), None);
    assert_eq!(cache.get("middle").as_deref(), Some("two"));
    assert_eq!(cache.get("newest").as_deref(), Some("three"));
    assert_eq!(cache.stats().total_entries, 2);
}

#[test]
fn test_invalidate_and_clear() {
    let cache = SuggestionCache::new();
    cache.insert("a", "1");
    cache.insert("b", "2");

    cache.invalidate("a");
    assert_eq!(cache.get("a"), None);
    assert!(cache.get("b").is_some());

    cache.clear();
    assert_eq!(cache.stats().total_entries, 0);
}

#[test]
fn test_stats_report_expired_entries_before_cleanup() {
    let clock = Arc::new(AdjustableClock::new(start_instant()));
    let cache = SuggestionCache::with_config_and_clock(
        SuggestionCacheConfig {
            ttl_minutes: 5,
            max_entries: 100,
        },
        clock.clone(),
    );

    cache.insert("a", "1");
    clock.advance_minutes(10);
    cache.insert("b", "2");

    // Insert sweeps expired entries, so only the fresh one remains
    let stats = cache.stats();
    assert_eq!(stats.total_entries, 1);
    assert_eq!(stats.expired_count, 0);

    clock.advance_minutes(10);
    assert_eq!(cache.stats().expired_count, 1);
    cache.cleanup_expired();
    assert_eq!(cache.stats().total_entries, 0);
}
