//! Backends behind the domain services.
//!
//! One [`ResourceGateway`] contract with two implementations, picked once when
//! the services are composed:
//! - [`LiveGateway`] delegates to the REST API through [`CrudService`]
//! - [`FixtureGateway`] answers from an in-memory store with simulated latency
//!
//! [`CrudService`]: crate::client::CrudService

pub mod fixture;
pub mod live;

pub use fixture::FixtureGateway;
pub use live::LiveGateway;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::api::{ListParams, ListResponse};
use crate::client::Resource;
use crate::error::Result;

#[async_trait]
pub trait ResourceGateway<T: Resource>: Send + Sync {
    async fn list(&self, params: Option<&ListParams>) -> Result<ListResponse<T>>;

    async fn get_by_id(&self, id: &str) -> Result<T>;

    async fn create(&self, payload: &T::Create) -> Result<T>;

    async fn update(&self, id: &str, payload: &T::Update) -> Result<T>;

    async fn remove(&self, id: &str) -> Result<()>;
}

/// Stand-in for network latency on the fixture path.
pub async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

/// Serialize into a JSON object.
pub fn to_record<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(<serde_json::Error as serde::de::Error>::custom("expected a JSON object").into()),
    }
}

/// Shallow merge: every top-level field present in `patch` replaces the
/// record's field; everything else is left untouched.
pub fn merge_fields<P: Serialize + ?Sized>(record: &mut Map<String, Value>, patch: &P) -> Result<()> {
    for (key, value) in to_record(patch)? {
        record.insert(key, value);
    }
    Ok(())
}

/// Apply a partial update to a typed value.
pub fn apply_patch<T, P>(current: &T, patch: &P) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    P: Serialize + ?Sized,
{
    let mut record = to_record(current)?;
    merge_fields(&mut record, patch)?;
    Ok(serde_json::from_value(Value::Object(record))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_only_touches_present_fields() {
        let mut record = to_record(&json!({ "id": "1", "nome": "Ana", "valor": 10 })).unwrap();
        merge_fields(&mut record, &json!({ "valor": 25 })).unwrap();

        assert_eq!(Value::Object(record), json!({ "id": "1", "nome": "Ana", "valor": 25 }));
    }

    #[test]
    fn non_object_patch_is_rejected() {
        let mut record = Map::new();
        assert!(merge_fields(&mut record, &json!([1, 2])).is_err());
    }
}
