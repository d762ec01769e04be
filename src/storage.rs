// ABOUTME: Storage collaborator traits for profile and daily-log documents
// ABOUTME: Async interfaces plus in-memory reference implementations for tests and docs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RoutineForge

//! Storage boundary
//!
//! The engine never talks to a database. Profile and log documents arrive
//! through these traits, implemented by whatever persistence collaborator a
//! deployment wires in. Raw profile documents are handed over as JSON and
//! normalized inside the engine, so a store implementation has no parsing
//! obligations.
//!
//! The in-memory implementations in [`memory`] back the integration tests
//! and double as reference semantics: one log per `(userEmail, date)` pair,
//! reads returned newest-first.

use async_trait::async_trait;
use routineforge_core::models::DailyLog;
use routineforge_core::AppResult;
use serde_json::Value;
use std::collections::HashSet;

/// Read access to stored profile documents, keyed by normalized email
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the raw profile document for a user, `None` when onboarding has
    /// not been completed
    async fn find_profile(&self, user_email: &str) -> AppResult<Option<Value>>;
}

/// Read access to stored daily logs, keyed by normalized email
#[async_trait]
pub trait LogStore: Send + Sync {
    /// The most recent logs for a user, newest first, at most `limit` entries
    async fn recent_logs(&self, user_email: &str, limit: usize) -> AppResult<Vec<DailyLog>>;

    /// The set of dates (`YYYY-MM-DD`) with a log, over at most the `limit`
    /// most recent entries
    async fn logged_dates(&self, user_email: &str, limit: usize) -> AppResult<HashSet<String>>;
}

/// In-memory store implementations
pub mod memory {
    use super::{async_trait, AppResult, DailyLog, HashSet, LogStore, ProfileStore, Value};
    use routineforge_core::AppError;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory profile store
    #[derive(Debug, Default)]
    pub struct InMemoryProfileStore {
        profiles: RwLock<HashMap<String, Value>>,
    }

    impl InMemoryProfileStore {
        /// Create an empty store
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Insert or replace a profile document
        ///
        /// # Errors
        ///
        /// Returns a storage error when the lock is poisoned.
        pub fn upsert(&self, user_email: &str, doc: Value) -> AppResult<()> {
            let mut profiles = self
                .profiles
                .write()
                .map_err(|_| AppError::storage("profile store lock poisoned"))?;
            profiles.insert(user_email.trim().to_lowercase(), doc);
            Ok(())
        }
    }

    #[async_trait]
    impl ProfileStore for InMemoryProfileStore {
        async fn find_profile(&self, user_email: &str) -> AppResult<Option<Value>> {
            let profiles = self
                .profiles
                .read()
                .map_err(|_| AppError::storage("profile store lock poisoned"))?;
            Ok(profiles.get(user_email).cloned())
        }
    }

    /// In-memory daily-log store; one log per `(userEmail, date)` pair
    #[derive(Debug, Default)]
    pub struct InMemoryLogStore {
        logs: RwLock<HashMap<String, Vec<DailyLog>>>,
    }

    impl InMemoryLogStore {
        /// Create an empty store
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Insert or replace the log for the entry's `(userEmail, date)` pair,
        /// keeping the per-user list sorted newest first
        ///
        /// # Errors
        ///
        /// Returns a storage error when the lock is poisoned.
        pub fn upsert(&self, log: DailyLog) -> AppResult<()> {
            let mut logs = self
                .logs
                .write()
                .map_err(|_| AppError::storage("log store lock poisoned"))?;
            let entries = logs.entry(log.user_email.clone()).or_default();
            entries.retain(|existing| existing.date != log.date);
            entries.push(log);
            entries.sort_by(|a, b| b.date.cmp(&a.date));
            Ok(())
        }
    }

    #[async_trait]
    impl LogStore for InMemoryLogStore {
        async fn recent_logs(&self, user_email: &str, limit: usize) -> AppResult<Vec<DailyLog>> {
            let logs = self
                .logs
                .read()
                .map_err(|_| AppError::storage("log store lock poisoned"))?;
            Ok(logs.get(user_email).map_or_else(Vec::new, |entries| {
                entries.iter().take(limit).cloned().collect()
            }))
        }

        async fn logged_dates(&self, user_email: &str, limit: usize) -> AppResult<HashSet<String>> {
            let recent = self.recent_logs(user_email, limit).await?;
            Ok(recent.into_iter().map(|l| l.date).collect())
        }
    }
}
