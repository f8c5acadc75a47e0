use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use mfe_core::PanelClock;
use mfe_dashboard::{create_router, DashboardConfig, DashboardState};
use mfe_feed::SourceConfig;
use mfe_risk::ClassifierConfig;
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

const ENTRADA: &str = r#"{
    "posicional": [
        {"par": "btc", "side": "LONG", "preco": 97000.5, "alvo": 101000, "ganho_pct": 4.12, "assertividade": 71},
        {"symbol": "PEPE", "sinal": "SHORT", "gain_pct": -5.5, "confidence": "80"},
        {"par": "XYZ", "side": "LONG", "ganho_pct": 3}
    ],
    "ultima_atualizacao": "2025-12-27 14:10",
    "gain_min": 3,
    "assert_min": 65
}"#;

struct Fixture {
    dir: TempDir,
    config: DashboardConfig,
    source: SourceConfig,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("entrada.json"), ENTRADA).unwrap();
        std::fs::write(dir.path().join("coins.txt"), "BTC\nPEPE\n# comment\nSOL\n").unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>painel</html>").unwrap();
        std::fs::write(dir.path().join("top10.html"), "<html>top10</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('mfe');").unwrap();

        let config = DashboardConfig {
            static_dir: dir.path().to_path_buf(),
            ..DashboardConfig::default()
        };
        let source = SourceConfig {
            entrada_path: dir.path().join("entrada.json"),
            universe_path: dir.path().join("coins.txt"),
            top10_path: dir.path().join("top10.json"),
            ..SourceConfig::default()
        };
        Self {
            dir,
            config,
            source,
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn router(&self) -> Router {
        let state = DashboardState::from_config(
            &self.source,
            &ClassifierConfig::default(),
            PanelClock::brt(),
        );
        create_router(state, &self.config)
    }
}

async fn get(app: &Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let (status, _, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK, "{uri}");
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn entrada_fills_universe_in_file_order() {
    let fixture = Fixture::new();
    let app = fixture.router();

    let json = get_json(&app, "/api/entrada").await;
    assert_eq!(json["stale"], false);
    assert_eq!(json["universo_total"], 3);
    assert_eq!(json["total_exibidas"], 3);
    assert_eq!(json["total_sinais"], 2);
    assert_eq!(json["ultima_atualizacao"], "2025-12-27 14:10");
    assert_eq!(json["gain_min"], 3);

    let records = json["posicional"].as_array().unwrap();
    let pairs: Vec<&str> = records.iter().map(|r| r["par"].as_str().unwrap()).collect();
    assert_eq!(pairs, vec!["BTC", "PEPE", "SOL"]);

    assert_eq!(records[0]["side"], "LONG");
    assert_eq!(records[0]["preco"], 97000.5);
    assert_eq!(records[1]["side"], "SHORT");
    assert_eq!(records[1]["ganho_pct"], 5.5);
    assert_eq!(records[1]["assertividade"], "80");
    assert_eq!(records[2]["side"], "NÃO ENTRAR");
    assert_eq!(records[2]["preco"], "");
    assert_eq!(records[2]["data"], json["server_date"]);
}

#[tokio::test]
async fn mfe_alias_matches_entrada() {
    let fixture = Fixture::new();
    let app = fixture.router();

    let entrada = get_json(&app, "/api/entrada").await;
    let mfe = get_json(&app, "/api/mfe").await;
    assert_eq!(entrada["posicional"], mfe["posicional"]);
    assert_eq!(entrada["universo_total"], mfe["universo_total"]);
}

#[tokio::test]
async fn painel_derives_labels() {
    let fixture = Fixture::new();
    let app = fixture.router();

    let json = get_json(&app, "/api/painel").await;
    let records = json["posicional"].as_array().unwrap();

    assert_eq!(records[0]["risco"], "BAIXO");
    assert_eq!(records[0]["zona"], "VERDE");
    assert_eq!(records[0]["prioridade"], "ALTA");

    assert_eq!(records[1]["risco"], "ALTO");
    assert_eq!(records[1]["zona"], "VERDE");
    assert_eq!(records[1]["prioridade"], "BAIXA");

    assert_eq!(records[2]["risco"], "BAIXO");
    assert_eq!(records[2]["zona"], "-");
    assert_eq!(records[2]["prioridade"], "NÃO OPERAR");
}

#[tokio::test]
async fn failed_read_serves_last_good_as_stale() {
    let fixture = Fixture::new();
    let app = fixture.router();

    let first = get_json(&app, "/api/entrada").await;
    assert_eq!(first["stale"], false);

    std::fs::write(fixture.path().join("entrada.json"), "{\"posicional\": [").unwrap();
    let second = get_json(&app, "/api/entrada").await;
    assert_eq!(second["stale"], true);
    assert_eq!(second["posicional"], first["posicional"]);
    assert_eq!(second["ultima_atualizacao"], "2025-12-27 14:10");

    std::fs::write(fixture.path().join("entrada.json"), ENTRADA).unwrap();
    let third = get_json(&app, "/api/entrada").await;
    assert_eq!(third["stale"], false);
}

#[tokio::test]
async fn missing_source_without_cache_serves_placeholders() {
    let fixture = Fixture::new();
    std::fs::remove_file(fixture.path().join("entrada.json")).unwrap();
    let app = fixture.router();

    let json = get_json(&app, "/api/entrada").await;
    assert_eq!(json["stale"], true);
    assert_eq!(json["universo_total"], 3);
    assert_eq!(json["total_sinais"], 0);
    assert_eq!(json["ultima_atualizacao"], "");
    let records = json["posicional"].as_array().unwrap();
    assert!(records.iter().all(|r| r["side"] == "NÃO ENTRAR"));
}

#[tokio::test]
async fn health_reports_ok() {
    let fixture = Fixture::new();
    let json = get_json(&fixture.router(), "/health").await;
    assert_eq!(json["ok"], true);
    assert_eq!(json["server_now"].as_str().unwrap().len(), 19);
}

#[tokio::test]
async fn top10_missing_is_empty_shape() {
    let fixture = Fixture::new();
    let json = get_json(&fixture.router(), "/api/top10").await;
    assert_eq!(json["total_top"], 0);
    assert_eq!(json["top10"], serde_json::json!([]));
}

#[tokio::test]
async fn top10_passes_document_through() {
    let fixture = Fixture::new();
    std::fs::write(
        fixture.path().join("top10.json"),
        r#"{"agora_brt":"2025-12-27 14:20:00","total_top":1,"top10":[{"par":"SOL","nota":9}]}"#,
    )
    .unwrap();

    let json = get_json(&fixture.router(), "/api/top10").await;
    assert_eq!(json["total_top"], 1);
    assert_eq!(json["top10"][0]["nota"], 9);
}

#[tokio::test]
async fn pages_and_assets_are_served() {
    let fixture = Fixture::new();
    let app = fixture.router();

    let (status, _, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>painel</html>");

    let (status, _, body) = get(&app, "/top10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<html>top10</html>");

    let (status, _, body) = get(&app, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"console.log('mfe');");

    let (status, _, _) = get(&app, "/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_are_not_cacheable() {
    let fixture = Fixture::new();
    let app = fixture.router();

    for uri in ["/api/entrada", "/api/painel", "/api/top10", "/health", "/", "/app.js"] {
        let (_, headers, _) = get(&app, uri).await;
        assert_eq!(headers[header::CACHE_CONTROL], "no-store", "{uri}");
        assert_eq!(headers[header::PRAGMA], "no-cache", "{uri}");
        assert_eq!(headers[header::EXPIRES], "0", "{uri}");
    }
}

#[tokio::test]
async fn metrics_are_exposed() {
    let fixture = Fixture::new();
    let app = fixture.router();

    get_json(&app, "/api/entrada").await;
    let (status, _, body) = get(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("mfe_requests_total{route=\"/api/entrada\"}"));
}
