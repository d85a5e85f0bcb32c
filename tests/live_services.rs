//! Services composed against a live (mocked-over-HTTP) backend.

use std::collections::HashMap;

use opj_api_client::domain::{LoginCredentials, Role};
use opj_api_client::{Services, Settings};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn live_services(server: &MockServer) -> Services {
    let vars = HashMap::from([
        ("OPJ_USE_MOCK_API".to_string(), "false".to_string()),
        ("OPJ_API_BASE_URL".to_string(), format!("{}/api", server.uri())),
    ]);
    let settings = Settings::from_lookup(|key| vars.get(key).cloned()).unwrap();
    Services::from_settings(&settings).unwrap()
}

fn user_json() -> serde_json::Value {
    json!({ "id": "1", "name": "Administrador OPJ", "email": "admin@opjengenharia.com.br", "role": "admin" })
}

#[tokio::test]
async fn login_token_is_used_on_later_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "admin@opjengenharia.com.br", "password": "admin123" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "user": user_json(), "token": "jwt-1" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/projetos/dashboard/stats"))
        .and(header("authorization", "Bearer jwt-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalProjetos": 10,
            "projetosEmAndamento": 4,
            "projetosFinalizados": 5,
            "projetosPendentes": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let services = live_services(&server);
    let user = services
        .auth
        .login(&LoginCredentials::new("admin@opjengenharia.com.br", "admin123"))
        .await
        .unwrap();

    assert_eq!(user.role, Role::Admin);
    assert_eq!(services.session.token().unwrap().as_deref(), Some("jwt-1"));
    assert_eq!(services.session.user().unwrap(), Some(user));
    assert!(services.auth.is_authenticated().unwrap());

    let stats = services.projetos.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_projetos, 10);
}

#[tokio::test]
async fn bare_user_login_keeps_no_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&server)
        .await;

    let services = live_services(&server);
    services
        .auth
        .login(&LoginCredentials::new("admin@opjengenharia.com.br", "admin123"))
        .await
        .unwrap();

    assert_eq!(services.session.token().unwrap(), None);
}

#[tokio::test]
async fn rejected_login_is_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Credenciais inválidas" })),
        )
        .mount(&server)
        .await;

    let services = live_services(&server);
    let err = services
        .auth
        .login(&LoginCredentials::new("x@y.z", "nope"))
        .await
        .unwrap_err();

    assert!(err.is_invalid_credentials());
    assert!(!services.auth.is_authenticated().unwrap());
}

#[tokio::test]
async fn logout_clears_session_even_when_server_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let services = live_services(&server);
    services.session.set_token(Some("jwt-1")).unwrap();

    let err = services.auth.logout().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(services.session.token().unwrap(), None);
    assert!(!services.auth.is_authenticated().unwrap());
}

#[tokio::test]
async fn current_user_is_none_without_a_server_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let services = live_services(&server);
    assert_eq!(services.auth.current_user().await.unwrap(), None);
}

#[tokio::test]
async fn finance_summary_and_settings_reset_hit_their_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/financeiro/resumo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalReceitas": 100.0,
            "totalDespesas": 40.0,
            "saldo": 60.0,
            "totalPendentes": 0.0
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/configuracoes/reset"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::to_value(opj_api_client::fixtures::configuracoes()).unwrap()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let services = live_services(&server);

    let resumo = services.financeiro.resumo().await.unwrap();
    assert_eq!(resumo.saldo, 60.0);

    let settings = services.configuracoes.reset().await.unwrap();
    assert_eq!(settings.nome_empresa, "OPJ Engenharia");
}

#[tokio::test]
async fn backup_restore_and_delete_use_the_backup_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/database/backups/b-1/restore"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Backup restaurado" })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/database/backups/b-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let services = live_services(&server);

    let restored = services.banco_dados.restore_backup("b-1").await.unwrap();
    assert_eq!(restored.message, "Backup restaurado");
    services.banco_dados.delete_backup("b-1").await.unwrap();
}

#[tokio::test]
async fn bodyless_actions_still_succeed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/database/optimize"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/database/backups/b%2F1/restore"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let services = live_services(&server);

    let optimized = services.banco_dados.optimize().await.unwrap();
    assert_eq!(optimized.message, "Banco de dados otimizado com sucesso");

    let restored = services.banco_dados.restore_backup("b/1").await.unwrap();
    assert_eq!(restored.message, "Backup restaurado com sucesso");
}

#[tokio::test]
async fn bodyless_backup_creation_reads_the_listing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/database/backups"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/database/backups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "9", "name": "backup_manual_20240120", "size": "136.0 MB", "date": "2024-01-20 10:00", "type": "manual" },
            { "id": "1", "name": "backup_auto_20240119", "size": "135.8 MB", "date": "2024-01-19 02:00", "type": "automatic" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let backup = live_services(&server).banco_dados.create_backup().await.unwrap();
    assert_eq!(backup.id, "9");
}

#[tokio::test]
async fn bodyless_settings_reset_reads_settings_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/configuracoes/reset"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/configuracoes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::to_value(opj_api_client::fixtures::configuracoes()).unwrap()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let settings = live_services(&server).configuracoes.reset().await.unwrap();
    assert_eq!(settings, opj_api_client::fixtures::configuracoes());
}
