//! Projects plus the dashboard counters.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::ResourceService;
use crate::api::{ListParams, ListResponse};
use crate::client::{HttpClient, RequestOptions};
use crate::domain::{AtualizacaoProjeto, DashboardStats, NovoProjeto, Projeto};
use crate::error::Result;
use crate::fixtures;
use crate::gateway::{simulate_latency, FixtureGateway};

#[async_trait]
pub trait DashboardStatsSource: Send + Sync {
    async fn dashboard_stats(&self) -> Result<DashboardStats>;
}

/// `GET /projetos/dashboard/stats`
pub struct LiveDashboardStats {
    http: HttpClient,
}

#[async_trait]
impl DashboardStatsSource for LiveDashboardStats {
    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.http
            .get("/projetos/dashboard/stats", RequestOptions::new())
            .await
    }
}

/// Counters computed from the fixture store itself.
#[async_trait]
impl DashboardStatsSource for FixtureGateway<Projeto> {
    async fn dashboard_stats(&self) -> Result<DashboardStats> {
        simulate_latency(self.latency()).await;
        Ok(DashboardStats::from_projetos(&self.snapshot()))
    }
}

#[derive(Clone)]
pub struct ProjetoService {
    projetos: ResourceService<Projeto>,
    stats: Arc<dyn DashboardStatsSource>,
}

impl ProjetoService {
    pub fn new(projetos: ResourceService<Projeto>, stats: Arc<dyn DashboardStatsSource>) -> Self {
        Self { projetos, stats }
    }

    pub fn live(http: HttpClient) -> Self {
        Self::new(
            ResourceService::live(http.clone()),
            Arc::new(LiveDashboardStats { http }),
        )
    }

    pub fn fixture(latency: Duration) -> Self {
        let store = FixtureGateway::new(fixtures::projetos(), latency);
        Self::new(ResourceService::new(Arc::new(store.clone())), Arc::new(store))
    }

    pub async fn list(&self, params: Option<&ListParams>) -> Result<Vec<Projeto>> {
        self.projetos.list(params).await
    }

    pub async fn list_page(&self, params: Option<&ListParams>) -> Result<ListResponse<Projeto>> {
        self.projetos.list_page(params).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Projeto> {
        self.projetos.get_by_id(id).await
    }

    pub async fn find(&self, id: &str) -> Result<Option<Projeto>> {
        self.projetos.find(id).await
    }

    pub async fn create(&self, payload: &NovoProjeto) -> Result<Projeto> {
        self.projetos.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: &AtualizacaoProjeto) -> Result<Projeto> {
        self.projetos.update(id, payload).await
    }

    pub async fn remove(&self, id: &str) -> Result<()> {
        self.projetos.remove(id).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.stats.dashboard_stats().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatusProjeto;

    #[tokio::test]
    async fn fixture_stats_follow_store_mutations() {
        let service = ProjetoService::fixture(Duration::ZERO);

        let before = service.dashboard_stats().await.unwrap();
        assert_eq!(
            before,
            DashboardStats {
                total_projetos: 3,
                projetos_em_andamento: 2,
                projetos_finalizados: 0,
                projetos_pendentes: 0,
            }
        );

        service
            .update(
                "1",
                &AtualizacaoProjeto {
                    status: Some(StatusProjeto::Concluido),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        service.remove("2").await.unwrap();

        let after = service.dashboard_stats().await.unwrap();
        assert_eq!(after.total_projetos, 2);
        assert_eq!(after.projetos_em_andamento, 1);
        assert_eq!(after.projetos_finalizados, 1);
    }

    #[tokio::test]
    async fn update_refreshes_modification_date_only() {
        let service = ProjetoService::fixture(Duration::ZERO);
        let before = service.get_by_id("3").await.unwrap();

        let after = service
            .update(
                "3",
                &AtualizacaoProjeto {
                    protocolo: Some("PROJ-2024-003-R1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(after.protocolo, "PROJ-2024-003-R1");
        assert_eq!(after.data_criacao, before.data_criacao);
        assert_ne!(after.data_atualizacao, before.data_atualizacao);
        assert_eq!(after.cliente, before.cliente);
        assert_eq!(after.modulos, before.modulos);
    }

    #[tokio::test]
    async fn find_maps_missing_project_to_none() {
        let service = ProjetoService::fixture(Duration::ZERO);
        assert!(service.find("404").await.unwrap().is_none());
        assert!(service.find("1").await.unwrap().is_some());
    }
}
