use async_trait::async_trait;

use super::ResourceGateway;
use crate::api::{ListParams, ListResponse};
use crate::client::{CrudService, HttpClient, Resource};
use crate::error::Result;

/// Gateway backed by the REST API.
pub struct LiveGateway<T> {
    crud: CrudService<T>,
}

impl<T: Resource> LiveGateway<T> {
    pub fn new(http: HttpClient) -> Self {
        Self {
            crud: CrudService::new(http),
        }
    }

    pub fn from_crud(crud: CrudService<T>) -> Self {
        Self { crud }
    }
}

#[async_trait]
impl<T: Resource> ResourceGateway<T> for LiveGateway<T> {
    async fn list(&self, params: Option<&ListParams>) -> Result<ListResponse<T>> {
        self.crud.list(params).await
    }

    async fn get_by_id(&self, id: &str) -> Result<T> {
        self.crud.get_by_id(id).await
    }

    async fn create(&self, payload: &T::Create) -> Result<T> {
        self.crud.create(payload).await
    }

    async fn update(&self, id: &str, payload: &T::Update) -> Result<T> {
        self.crud.update(id, payload).await
    }

    async fn remove(&self, id: &str) -> Result<()> {
        self.crud.remove(id).await
    }
}
