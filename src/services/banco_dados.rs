//! Database administration: tables, health, optimisation and backups.

use async_trait::async_trait;
use chrono::Local;
use parking_lot::RwLock;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::api::MessageResponse;
use crate::client::{path_segment, HttpClient, RequestOptions};
use crate::domain::{Backup, BackupKind, DatabaseStatus, DatabaseTable, Performance};
use crate::error::{MockError, Result};
use crate::fixtures;
use crate::gateway::simulate_latency;

#[async_trait]
pub trait DatabaseAdminBackend: Send + Sync {
    async fn list_tables(&self) -> Result<Vec<DatabaseTable>>;

    async fn status(&self) -> Result<DatabaseStatus>;

    async fn optimize(&self) -> Result<MessageResponse>;

    async fn list_backups(&self) -> Result<Vec<Backup>>;

    async fn create_backup(&self) -> Result<Backup>;

    async fn restore_backup(&self, id: &str) -> Result<MessageResponse>;

    async fn delete_backup(&self, id: &str) -> Result<()>;
}

pub struct LiveDatabaseAdmin {
    http: HttpClient,
}

const OPTIMIZED_MESSAGE: &str = "Banco de dados otimizado com sucesso";
const RESTORED_MESSAGE: &str = "Backup restaurado com sucesso";

impl LiveDatabaseAdmin {
    /// POST an action endpoint; a bodyless success gets `fallback` as message.
    async fn action(&self, path: &str, fallback: &str) -> Result<MessageResponse> {
        let reply = self
            .http
            .request(Method::POST, path, RequestOptions::new())
            .await?
            .decode_optional()?;
        Ok(reply.unwrap_or_else(|| MessageResponse::new(fallback)))
    }

    fn backup_path(id: &str) -> String {
        format!("/database/backups/{}", path_segment(id))
    }
}

#[async_trait]
impl DatabaseAdminBackend for LiveDatabaseAdmin {
    async fn list_tables(&self) -> Result<Vec<DatabaseTable>> {
        self.http.get("/database/tables", RequestOptions::new()).await
    }

    async fn status(&self) -> Result<DatabaseStatus> {
        self.http.get("/database/status", RequestOptions::new()).await
    }

    async fn optimize(&self) -> Result<MessageResponse> {
        self.action("/database/optimize", OPTIMIZED_MESSAGE).await
    }

    async fn list_backups(&self) -> Result<Vec<Backup>> {
        self.http.get("/database/backups", RequestOptions::new()).await
    }

    async fn create_backup(&self) -> Result<Backup> {
        let created = self
            .http
            .request(Method::POST, "/database/backups", RequestOptions::new())
            .await?
            .decode_optional()?;
        if let Some(backup) = created {
            return Ok(backup);
        }

        // No body: the listing is newest first
        self.list_backups()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                <serde_json::Error as serde::de::Error>::custom("backup created but not listed").into()
            })
    }

    async fn restore_backup(&self, id: &str) -> Result<MessageResponse> {
        let path = format!("{}/restore", Self::backup_path(id));
        self.action(&path, RESTORED_MESSAGE).await
    }

    async fn delete_backup(&self, id: &str) -> Result<()> {
        self.http
            .request(Method::DELETE, &Self::backup_path(id), RequestOptions::new())
            .await?;
        Ok(())
    }
}

pub struct FixtureDatabaseAdmin {
    tables: Vec<DatabaseTable>,
    backups: RwLock<Vec<Backup>>,
    status: RwLock<DatabaseStatus>,
    latency: Duration,
}

impl FixtureDatabaseAdmin {
    pub fn new(latency: Duration) -> Self {
        Self {
            tables: fixtures::database_tables(),
            backups: RwLock::new(fixtures::backups()),
            status: RwLock::new(fixtures::database_status()),
            latency,
        }
    }

    fn backup_not_found(id: &str) -> MockError {
        MockError::NotFound {
            resource: "backup",
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl DatabaseAdminBackend for FixtureDatabaseAdmin {
    async fn list_tables(&self) -> Result<Vec<DatabaseTable>> {
        simulate_latency(self.latency).await;
        Ok(self.tables.clone())
    }

    async fn status(&self) -> Result<DatabaseStatus> {
        simulate_latency(self.latency).await;
        Ok(self.status.read().clone())
    }

    async fn optimize(&self) -> Result<MessageResponse> {
        simulate_latency(self.latency).await;

        let mut status = self.status.write();
        status.performance = Performance::Otima;
        status.ultima_otimizacao = Local::now().format("%Y-%m-%d %H:%M").to_string();
        debug!(at = %status.ultima_otimizacao, "fixture database optimized");

        Ok(MessageResponse::new(OPTIMIZED_MESSAGE))
    }

    async fn list_backups(&self) -> Result<Vec<Backup>> {
        simulate_latency(self.latency).await;
        Ok(self.backups.read().clone())
    }

    async fn create_backup(&self) -> Result<Backup> {
        simulate_latency(self.latency).await;

        let now = Local::now();
        let mut backups = self.backups.write();
        let backup = Backup {
            id: Uuid::new_v4().to_string(),
            name: format!("backup_manual_{}", now.format("%Y%m%d")),
            // Same footprint as the latest snapshot
            size: backups
                .first()
                .map(|b| b.size.clone())
                .unwrap_or_else(|| "0 MB".to_string()),
            date: now.format("%Y-%m-%d %H:%M").to_string(),
            kind: BackupKind::Manual,
        };

        // Newest first
        backups.insert(0, backup.clone());
        debug!(id = %backup.id, "fixture backup created");
        Ok(backup)
    }

    async fn restore_backup(&self, id: &str) -> Result<MessageResponse> {
        simulate_latency(self.latency).await;

        let backups = self.backups.read();
        let backup = backups
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| Self::backup_not_found(id))?;

        Ok(MessageResponse::new(format!(
            "Backup {} restaurado com sucesso",
            backup.name
        )))
    }

    async fn delete_backup(&self, id: &str) -> Result<()> {
        simulate_latency(self.latency).await;

        let mut backups = self.backups.write();
        let index = backups
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| Self::backup_not_found(id))?;
        backups.remove(index);
        Ok(())
    }
}

#[derive(Clone)]
pub struct BancoDadosService {
    backend: Arc<dyn DatabaseAdminBackend>,
}

impl BancoDadosService {
    pub fn new(backend: Arc<dyn DatabaseAdminBackend>) -> Self {
        Self { backend }
    }

    pub fn live(http: HttpClient) -> Self {
        Self::new(Arc::new(LiveDatabaseAdmin { http }))
    }

    pub fn fixture(latency: Duration) -> Self {
        Self::new(Arc::new(FixtureDatabaseAdmin::new(latency)))
    }

    pub async fn list_tables(&self) -> Result<Vec<DatabaseTable>> {
        self.backend.list_tables().await
    }

    pub async fn status(&self) -> Result<DatabaseStatus> {
        self.backend.status().await
    }

    pub async fn optimize(&self) -> Result<MessageResponse> {
        self.backend.optimize().await
    }

    pub async fn list_backups(&self) -> Result<Vec<Backup>> {
        self.backend.list_backups().await
    }

    pub async fn create_backup(&self) -> Result<Backup> {
        self.backend.create_backup().await
    }

    pub async fn restore_backup(&self, id: &str) -> Result<MessageResponse> {
        self.backend.restore_backup(id).await
    }

    pub async fn delete_backup(&self, id: &str) -> Result<()> {
        self.backend.delete_backup(id).await
    }
}
