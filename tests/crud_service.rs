mod common;

use opj_api_client::api::{ListParams, ListResponse, SortOrder};
use opj_api_client::domain::{AtualizacaoServico, NovoServico, Servico, StatusServico};
use opj_api_client::CrudService;
use reqwest::StatusCode;
use rstest::rstest;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn servico_json(id: &str, nome: &str) -> Value {
    json!({
        "id": id,
        "nome": nome,
        "cliente": "João Silva",
        "status": "pendente",
        "data": "2024-01-20",
        "valor": 500.0
    })
}

async fn service(server: &MockServer) -> CrudService<Servico> {
    CrudService::new(common::client(server))
}

#[rstest]
#[case::bare_array(json!([servico_json("1", "A"), servico_json("2", "B")]), false)]
#[case::envelope(
    json!({ "data": [servico_json("1", "A"), servico_json("2", "B")], "total": 12, "page": 1, "limit": 2 }),
    true
)]
#[tokio::test]
async fn list_accepts_both_response_shapes(#[case] body: Value, #[case] paginated: bool) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/servicos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let response = service(&server).await.list(None).await.unwrap();

    assert_eq!(matches!(response, ListResponse::Page(_)), paginated);
    let nomes: Vec<_> = response.into_items().into_iter().map(|s| s.nome).collect();
    assert_eq!(nomes, ["A", "B"]);
}

#[tokio::test]
async fn list_params_become_camel_case_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/servicos"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .and(query_param("sortBy", "valor"))
        .and(query_param("sortOrder", "desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListParams::new().page(1).limit(10).sort("valor", SortOrder::Desc);
    let response = service(&server).await.list(Some(&params)).await.unwrap();
    assert!(response.is_empty());
}

#[tokio::test]
async fn missing_entity_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/servicos/42"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Serviço não encontrado" })),
        )
        .mount(&server)
        .await;

    let err = service(&server).await.get_by_id("42").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert!(err.to_string().contains("Serviço não encontrado"));
}

#[tokio::test]
async fn create_posts_the_payload() {
    let server = MockServer::start().await;
    let payload = NovoServico {
        nome: "Instalação de Inversor".to_string(),
        cliente: "João Silva".to_string(),
        status: StatusServico::Pendente,
        data: "2024-01-20".to_string(),
        valor: 500.0,
    };
    Mock::given(method("POST"))
        .and(path("/api/servicos"))
        .and(body_json(json!({
            "nome": "Instalação de Inversor",
            "cliente": "João Silva",
            "status": "pendente",
            "data": "2024-01-20",
            "valor": 500.0
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(servico_json("7", "Instalação de Inversor")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = service(&server).await.create(&payload).await.unwrap();
    assert_eq!(created.id, "7");
    assert_eq!(created.nome, payload.nome);
}

#[tokio::test]
async fn update_puts_only_the_present_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/servicos/3"))
        .and(body_json(json!({ "status": "concluido" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "3",
            "nome": "Vistoria Técnica",
            "cliente": "Pedro Oliveira",
            "status": "concluido",
            "data": "2024-01-18",
            "valor": 300.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let patch = AtualizacaoServico {
        status: Some(StatusServico::Concluido),
        ..Default::default()
    };
    let updated = service(&server).await.update("3", &patch).await.unwrap();
    assert_eq!(updated.status, StatusServico::Concluido);
}

#[tokio::test]
async fn remove_ignores_the_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/servicos/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Removido" })))
        .expect(1)
        .mount(&server)
        .await;

    service(&server).await.remove("3").await.unwrap();
}

#[tokio::test]
async fn custom_path_is_normalised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/arquivados/servicos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(servico_json("1", "Antigo")))
        .expect(1)
        .mount(&server)
        .await;

    let crud: CrudService<Servico> =
        CrudService::with_path(common::client(&server), "arquivados/servicos/");
    assert_eq!(crud.base(), "/arquivados/servicos");

    let servico = crud.get_by_id("1").await.unwrap();
    assert_eq!(servico.nome, "Antigo");
}

#[tokio::test]
async fn ids_are_percent_encoded_into_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/servicos/ordem%2F7%23a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(servico_json("ordem/7#a", "Reparo")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/servicos/ordem%2F7%23a"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let crud = service(&server).await;
    assert_eq!(crud.get_by_id("ordem/7#a").await.unwrap().id, "ordem/7#a");
    crud.remove("ordem/7#a").await.unwrap();
}
