use catalog_desk::core::CatalogApi;
use catalog_desk::domain::model::{ProductPayload, ServicePayload};
use catalog_desk::utils::error::{ErrorCategory, ErrorSeverity};
use catalog_desk::{is_service, CatalogError, HttpCatalogApi, Settings};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn api_for(server: &MockServer) -> HttpCatalogApi {
    HttpCatalogApi::new(&Settings::new(server.base_url())).unwrap()
}

#[tokio::test]
async fn test_list_detailed_classifies_rows() {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/api/produtos/detalhes");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {
                    "id_produto": 1,
                    "nomeProduto": "Mouse",
                    "descricao_produto": "USB mouse",
                    "codg_barras_prod": "4006381333931",
                    "temperatura_produto": null,
                    "estoque_minimo": 2,
                    "estoque_maximo": 10,
                    "ponto_abastecimento": 5,
                    "unidade_medida": "UN"
                },
                {
                    "id_produto": 2,
                    "nomeProduto": "Installation",
                    "descricao_produto": "On-site setup",
                    "codg_barras_prod": "9999999999996",
                    "temperatura_produto": null,
                    "estoque_minimo": 0,
                    "estoque_maximo": 1,
                    "ponto_abastecimento": 1,
                    "unidade_medida": "UN"
                },
                {
                    "id_produto": 3,
                    "nomeProduto": "Consulting",
                    "descricao_produto": "Hourly",
                    "codg_barras_prod": "7891234567895",
                    "estoque_minimo": 0,
                    "estoque_maximo": 1,
                    "ponto_abastecimento": 1
                }
            ]));
    });

    let records = api_for(&server).list_detailed().await.unwrap();

    list_mock.assert();
    assert_eq!(records.len(), 3);
    let kinds: Vec<bool> = records.iter().map(is_service).collect();
    assert_eq!(kinds, vec![false, true, true]);
    assert_eq!(records[2].unit, None);
}

#[tokio::test]
async fn test_list_units() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/unidades-medida");
        then.status(200).json_body(json!([
            { "id": 1, "abreviacao": "UN", "descricao": "Unidade" },
            { "id": 2, "abreviacao": "KG", "descricao": "Quilograma" }
        ]));
    });

    let units = api_for(&server).list_units().await.unwrap();
    assert_eq!(units.len(), 2);
    assert_eq!(units[1].label(), "KG - Quilograma");
}

#[tokio::test]
async fn test_create_and_update_product_bodies() {
    let server = MockServer::start();
    let payload = ProductPayload {
        id: None,
        name: "Mouse".to_string(),
        description: "USB mouse".to_string(),
        barcode: "4006381333931".to_string(),
        unit_id: Some(1),
        temperature: None,
        min_stock: Some(2),
        max_stock: Some(10),
        reorder_point: Some(5),
    };

    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/produtos")
            .header("Content-Type", "application/json")
            .json_body(json!({
                "nomeProduto": "Mouse",
                "descricao_produto": "USB mouse",
                "codg_barras_prod": "4006381333931",
                "id_unmedida": 1,
                "temperatura_produto": null,
                "estoque_minimo": 2,
                "estoque_maximo": 10,
                "ponto_abastecimento": 5
            }));
        then.status(201).json_body(json!({ "id_produto": 11 }));
    });

    let update_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/produtos/11")
            .json_body_partial(r#"{ "id_produto": 11, "nomeProduto": "Mouse" }"#);
        then.status(200).json_body(json!({ "id_produto": 11 }));
    });

    let api = api_for(&server);
    let created = api.create_product(&payload).await.unwrap();
    assert_eq!(created["id_produto"], 11);

    let editing = ProductPayload {
        id: Some(11),
        ..payload
    };
    api.update_product(11, &editing).await.unwrap();

    create_mock.assert();
    update_mock.assert();
}

#[tokio::test]
async fn test_service_endpoints() {
    let server = MockServer::start();
    let body = json!({ "nomeProduto": "Installation", "descricao_produto": "On-site setup" });

    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/api/servicos").json_body(body.clone());
        then.status(201).json_body(json!({ "id_produto": 4 }));
    });
    let update_mock = server.mock(|when, then| {
        when.method(PUT).path("/api/servicos/4").json_body(body.clone());
        then.status(200).json_body(json!({ "id_produto": 4 }));
    });

    let api = api_for(&server);
    let payload = ServicePayload {
        name: "Installation".to_string(),
        description: "On-site setup".to_string(),
    };
    api.create_service(&payload).await.unwrap();
    api.update_service(4, &payload).await.unwrap();

    create_mock.assert();
    update_mock.assert();
}

/// 成功狀態但內容是純文字，不應變成錯誤
#[tokio::test]
async fn test_plain_text_success_body_is_kept_as_string() {
    let server = MockServer::start();
    let create_mock = server.mock(|when, then| {
        when.method(POST).path("/api/produtos");
        then.status(201).body("created");
    });
    let update_mock = server.mock(|when, then| {
        when.method(PUT).path("/api/servicos/4");
        then.status(200);
    });

    let api = api_for(&server);
    let created = api
        .create_product(&ProductPayload {
            name: "Mouse".to_string(),
            barcode: "4006381333931".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created, json!("created"));

    let updated = api
        .update_service(
            4,
            &ServicePayload {
                name: "Installation".to_string(),
                description: "On-site setup".to_string(),
            },
        )
        .await
        .unwrap();
    assert!(updated.is_null());

    create_mock.assert();
    update_mock.assert();
}

#[tokio::test]
async fn test_delete_endpoints_accept_empty_body() {
    let server = MockServer::start();
    let by_id = server.mock(|when, then| {
        when.method(DELETE).path("/api/produtos/7");
        then.status(204);
    });
    let by_name = server.mock(|when, then| {
        when.method(DELETE)
            .path("/api/produtos/nome")
            .query_param("nome", "Mouse Gamer RGB");
        then.status(204);
    });

    let api = api_for(&server);
    api.delete_product(7).await.unwrap();
    api.delete_product_by_name("Mouse Gamer RGB").await.unwrap();

    by_id.assert();
    by_name.assert();
}

#[tokio::test]
async fn test_api_error_messages() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/servicos");
        then.status(400)
            .json_body(json!({ "status": 400, "error": "Bad Request", "message": "Name already taken" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/produtos/99");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/produtos/5");
        then.status(500).body("x".repeat(300));
    });

    let api = api_for(&server);

    let err = api
        .create_service(&ServicePayload {
            name: "Installation".to_string(),
            description: "On-site setup".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::ApiError { status: 400, .. }));
    assert_eq!(err.to_string(), "Name already taken");

    let err = api.get_product(99).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 404");

    let err = api.delete_product(5).await.unwrap_err();
    let message = err.to_string();
    assert_eq!(message.len(), 203);
    assert!(message.ends_with("..."));
}

#[tokio::test]
async fn test_base_url_prefix_and_headers_are_kept() {
    let server = MockServer::start();
    let units_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/estoque/api/unidades-medida")
            .header("X-Client", "catalog-desk");
        then.status(200).json_body(json!([]));
    });

    let mut settings = Settings::new(server.url("/estoque"));
    settings.timeout = Some(Duration::from_secs(5));
    settings
        .headers
        .insert("X-Client".to_string(), "catalog-desk".to_string());

    let api = HttpCatalogApi::new(&settings).unwrap();
    assert!(api.list_units().await.unwrap().is_empty());
    units_mock.assert();
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // 沒有服務在監聽的埠
    let api = HttpCatalogApi::new(&Settings::new("http://127.0.0.1:9")).unwrap();
    let err = api.list_detailed().await.unwrap_err();
    assert!(matches!(err, CatalogError::HttpError(_)));
    assert_eq!(err.category(), ErrorCategory::Network);
}

/// 回應格式不對是 API 的問題，不是網路問題
#[tokio::test]
async fn test_unexpected_list_shape_is_api_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/produtos/detalhes");
        then.status(200).json_body(json!({ "oops": 1 }));
    });

    let err = api_for(&server).list_detailed().await.unwrap_err();
    assert!(matches!(err, CatalogError::HttpError(ref e) if e.is_decode()));
    assert_eq!(err.category(), ErrorCategory::Api);
    assert_eq!(err.severity(), ErrorSeverity::High);
    assert_eq!(
        err.user_friendly_message(),
        "The catalog API answered with an unexpected response format"
    );
}
