//! Generic CRUD over one resource path.
//!
//! No entity-specific logic lives here: `<base>` and `<base>/<id>` templating
//! over [`HttpClient`].

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::marker::PhantomData;
use tracing::instrument;

use super::http::{path_segment, HttpClient, RequestOptions};
use crate::api::{ListParams, ListResponse};
use crate::error::Result;

/// An entity addressed by a REST collection path.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Payload accepted by `create`.
    type Create: Serialize + Send + Sync;
    /// Partial payload accepted by `update`; absent fields must not serialize.
    type Update: Serialize + Send + Sync;

    /// Collection path, e.g. `/projetos`.
    const PATH: &'static str;
    /// Human-readable name used in not-found errors.
    const NAME: &'static str;

    fn id(&self) -> &str;

    /// Hook for server-assigned fields on a freshly created record.
    fn on_create(_record: &mut Map<String, Value>, _now: DateTime<Utc>) {}

    /// Hook for server-maintained fields on an updated record.
    fn on_update(_record: &mut Map<String, Value>, _now: DateTime<Utc>) {}
}

/// `list/get_by_id/create/update/remove` for one resource.
pub struct CrudService<T> {
    http: HttpClient,
    base: String,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for CrudService<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base: self.base.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Resource> CrudService<T> {
    pub fn new(http: HttpClient) -> Self {
        Self::with_path(http, T::PATH)
    }

    /// Same contract mounted at a different collection path.
    pub fn with_path(http: HttpClient, resource_path: &str) -> Self {
        let resource_path = resource_path.trim_end_matches('/');
        let base = if resource_path.starts_with('/') {
            resource_path.to_string()
        } else {
            format!("/{resource_path}")
        };

        Self {
            http,
            base,
            _entity: PhantomData,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.base, path_segment(id))
    }

    #[instrument(skip(self), fields(resource = %self.base))]
    pub async fn list(&self, params: Option<&ListParams>) -> Result<ListResponse<T>> {
        let mut options = RequestOptions::new();
        if let Some(params) = params {
            options = options.query(params)?;
        }
        self.http.get(&self.base, options).await
    }

    #[instrument(skip(self), fields(resource = %self.base))]
    pub async fn get_by_id(&self, id: &str) -> Result<T> {
        self.http.get(&self.item_path(id), RequestOptions::new()).await
    }

    #[instrument(skip(self, payload), fields(resource = %self.base))]
    pub async fn create(&self, payload: &T::Create) -> Result<T> {
        self.http.post(&self.base, payload, RequestOptions::new()).await
    }

    #[instrument(skip(self, payload), fields(resource = %self.base))]
    pub async fn update(&self, id: &str, payload: &T::Update) -> Result<T> {
        self.http
            .put(&self.item_path(id), payload, RequestOptions::new())
            .await
    }

    #[instrument(skip(self), fields(resource = %self.base))]
    pub async fn remove(&self, id: &str) -> Result<()> {
        self.http
            .request(reqwest::Method::DELETE, &self.item_path(id), RequestOptions::new())
            .await?;
        Ok(())
    }
}
