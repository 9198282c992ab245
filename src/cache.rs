use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::error::AppError;

/// Cache keys, one per resource the pages query.
pub mod keys {
    pub const AUTH_USER: &str = "authUser";
    pub const COURSES: &str = "courses";
    pub const ASSIGNED_SECTIONS: &str = "assignedSections";
    pub const TERMS: &str = "terms";
    pub const USERS: &str = "users";

    pub fn course(course_id: i64) -> String {
        format!("course:{}", course_id)
    }

    pub fn assigned_section(section_id: i64) -> String {
        format!("assignedSection:{}", section_id)
    }

    pub fn enrollments(student_id: i64) -> String {
        format!("enrollments:{}", student_id)
    }

    pub fn prerequisites(course_id: i64) -> String {
        format!("prerequisites:{}", course_id)
    }
}

#[derive(Default)]
struct Slot {
    value: Option<serde_json::Value>,
}

/// Client-side query cache keyed by resource-name tags. A hit returns the
/// cached snapshot; a miss runs the fetch and stores the result. The
/// per-key lock makes concurrent identical queries wait on the first fetch
/// instead of issuing their own. Mutations call `invalidate` so the next
/// read refetches.
#[derive(Clone, Default)]
pub struct QueryCache {
    slots: Arc<Mutex<HashMap<String, Arc<Mutex<Slot>>>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    async fn slot(&self, key: &str) -> Arc<Mutex<Slot>> {
        let mut slots = self.slots.lock().await;
        slots.entry(key.to_string()).or_default().clone()
    }

    pub async fn query<T, F, Fut>(&self, key: &str, fetch: F) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let slot = self.slot(key).await;
        let mut slot = slot.lock().await;

        if let Some(value) = &slot.value {
            return serde_json::from_value(value.clone()).map_err(|e| {
                tracing::error!("cached value for '{}' does not deserialize: {}", key, e);
                AppError::generic()
            });
        }

        let fetched = fetch().await?;
        slot.value = Some(serde_json::to_value(&fetched).map_err(|e| {
            tracing::error!("failed to cache value for '{}': {}", key, e);
            AppError::generic()
        })?);
        Ok(fetched)
    }

    /// Drop the cached value for `key`; the next query refetches.
    pub async fn invalidate(&self, key: &str) {
        let slot = self.slot(key).await;
        slot.lock().await.value = None;
        tracing::debug!("invalidated query key '{}'", key);
    }
}
