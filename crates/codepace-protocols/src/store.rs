//! Durable key-value store protocol.
//!
//! The companion keeps a handful of JSON values (timer state, current and next
//! problem, completion flags) in a process-wide store that survives restarts.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::StoreError;

/// Well-known storage keys.
pub mod keys {
    pub const TIMER_STATE: &str = "timerState";
    pub const CURRENT_PROBLEM: &str = "currentProblem";
    pub const NEXT_PROBLEM: &str = "nextProblem";
    pub const LAST_COMPLETION_TIME: &str = "lastCompletionTime";
    pub const FIRST_TIME: &str = "firstTime";
}

/// Core trait for key-value stores.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a raw value. `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Write several entries as one atomic update.
    async fn set_many(&self, entries: Vec<(String, Value)>) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Write a single raw value.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.set_many(vec![(key.to_string(), value)]).await
    }
}

/// Read a typed value; JSON `null` reads as absent.
pub async fn get_json<T, S>(store: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key).await? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
    }
}

/// Write a typed value.
pub async fn set_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    store.set(key, serde_json::to_value(value)?).await
}
