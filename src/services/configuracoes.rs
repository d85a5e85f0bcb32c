//! System settings: read, partial update, factory reset.

use async_trait::async_trait;
use parking_lot::RwLock;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::client::{HttpClient, RequestOptions};
use crate::domain::{AtualizacaoConfiguracoes, ConfiguracoesSistema};
use crate::error::Result;
use crate::fixtures;
use crate::gateway::{apply_patch, simulate_latency};

#[async_trait]
pub trait SettingsBackend: Send + Sync {
    async fn get(&self) -> Result<ConfiguracoesSistema>;

    async fn update(&self, payload: &AtualizacaoConfiguracoes) -> Result<ConfiguracoesSistema>;

    async fn reset(&self) -> Result<ConfiguracoesSistema>;
}

pub struct LiveSettings {
    http: HttpClient,
}

#[async_trait]
impl SettingsBackend for LiveSettings {
    async fn get(&self) -> Result<ConfiguracoesSistema> {
        self.http.get("/configuracoes", RequestOptions::new()).await
    }

    async fn update(&self, payload: &AtualizacaoConfiguracoes) -> Result<ConfiguracoesSistema> {
        let options = RequestOptions::new().body(payload)?;
        self.write(Method::PUT, "/configuracoes", options).await
    }

    async fn reset(&self) -> Result<ConfiguracoesSistema> {
        self.write(Method::POST, "/configuracoes/reset", RequestOptions::new())
            .await
    }
}

impl LiveSettings {
    /// Send a write; when the reply carries no settings, read them back.
    async fn write(&self, method: Method, path: &str, options: RequestOptions) -> Result<ConfiguracoesSistema> {
        match self.http.request(method, path, options).await?.decode_optional()? {
            Some(settings) => Ok(settings),
            None => self.get().await,
        }
    }
}

pub struct FixtureSettings {
    current: RwLock<ConfiguracoesSistema>,
    latency: Duration,
}

impl FixtureSettings {
    pub fn new(latency: Duration) -> Self {
        Self {
            current: RwLock::new(fixtures::configuracoes()),
            latency,
        }
    }
}

#[async_trait]
impl SettingsBackend for FixtureSettings {
    async fn get(&self) -> Result<ConfiguracoesSistema> {
        simulate_latency(self.latency).await;
        Ok(self.current.read().clone())
    }

    async fn update(&self, payload: &AtualizacaoConfiguracoes) -> Result<ConfiguracoesSistema> {
        simulate_latency(self.latency).await;

        let mut current = self.current.write();
        *current = apply_patch(&*current, payload)?;
        debug!("fixture settings updated");
        Ok(current.clone())
    }

    async fn reset(&self) -> Result<ConfiguracoesSistema> {
        simulate_latency(self.latency).await;

        let defaults = fixtures::configuracoes();
        *self.current.write() = defaults.clone();
        Ok(defaults)
    }
}

#[derive(Clone)]
pub struct ConfiguracoesService {
    backend: Arc<dyn SettingsBackend>,
}

impl ConfiguracoesService {
    pub fn new(backend: Arc<dyn SettingsBackend>) -> Self {
        Self { backend }
    }

    pub fn live(http: HttpClient) -> Self {
        Self::new(Arc::new(LiveSettings { http }))
    }

    pub fn fixture(latency: Duration) -> Self {
        Self::new(Arc::new(FixtureSettings::new(latency)))
    }

    pub async fn get(&self) -> Result<ConfiguracoesSistema> {
        self.backend.get().await
    }

    pub async fn update(&self, payload: &AtualizacaoConfiguracoes) -> Result<ConfiguracoesSistema> {
        self.backend.update(payload).await
    }

    pub async fn reset(&self) -> Result<ConfiguracoesSistema> {
        self.backend.reset().await
    }
}
