//! Uniform CRUD facade over whichever gateway was composed in.

use std::sync::Arc;
use std::time::Duration;

use crate::api::{ListParams, ListResponse};
use crate::client::{HttpClient, Resource};
use crate::error::Result;
use crate::gateway::{FixtureGateway, LiveGateway, ResourceGateway};

pub struct ResourceService<T: Resource> {
    gateway: Arc<dyn ResourceGateway<T>>,
}

impl<T: Resource> Clone for ResourceService<T> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<T: Resource> ResourceService<T> {
    pub fn new(gateway: Arc<dyn ResourceGateway<T>>) -> Self {
        Self { gateway }
    }

    pub fn live(http: HttpClient) -> Self {
        Self::new(Arc::new(LiveGateway::<T>::new(http)))
    }

    pub fn fixture(seed: Vec<T>, latency: Duration) -> Self {
        Self::new(Arc::new(FixtureGateway::new(seed, latency)))
    }

    /// Entities as a plain sequence, whatever envelope the backend used.
    pub async fn list(&self, params: Option<&ListParams>) -> Result<Vec<T>> {
        Ok(self.gateway.list(params).await?.into_items())
    }

    /// The list response as received, envelope included.
    pub async fn list_page(&self, params: Option<&ListParams>) -> Result<ListResponse<T>> {
        self.gateway.list(params).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<T> {
        self.gateway.get_by_id(id).await
    }

    /// Like [`get_by_id`](Self::get_by_id), but a missing entity is `None`.
    /// Every other failure still propagates.
    pub async fn find(&self, id: &str) -> Result<Option<T>> {
        match self.gateway.get_by_id(id).await {
            Ok(entity) => Ok(Some(entity)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create(&self, payload: &T::Create) -> Result<T> {
        self.gateway.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &T::Update) -> Result<T> {
        self.gateway.update(id, payload).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.gateway.remove(id).await
    }
}
