use address_service::core::configure::geocoding::GeocodingConfig;
use address_service::infrastructure::error::AppError;
use address_service::domain::geolocation::geolocation::{Coordinates, GeocodingQuery};
use address_service::domain::geolocation::geolocation_gateway_interface::GeolocationGatewayInterface;
use address_service::infrastructure::gateway::geolocation::GoogleGeolocationGateway;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Provider {
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn geocode(
    State(provider): State<Provider>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    provider.seen.lock().unwrap().push(params.clone());

    match params.get("address").map(String::as_str) {
        Some("321 Street name, City, State") => Json(json!({
            "status": "OK",
            "results": [
                { "geometry": { "location": { "lat": 3.0, "lng": -3.0 } } },
                { "geometry": { "location": { "lat": 7.0, "lng": 7.0 } } }
            ]
        }))
        .into_response(),
        Some("500 Broken street, City, State") => {
            (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
        },
        Some("1 Slow street, City, State") => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "status": "ZERO_RESULTS", "results": [] })).into_response()
        },
        Some("2 Garbage street, City, State") => "not json".into_response(),
        _ => Json(json!({ "status": "ZERO_RESULTS", "results": [] })).into_response(),
    }
}

async fn spawn_provider() -> (String, Provider) {
    let provider = Provider::default();
    let app: Router = Router::new()
        .route("/maps/api/geocode/json", get(geocode))
        .with_state(provider.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/maps/api/"), provider)
}

fn gateway(base_url: String, timeout_secs: u64) -> GoogleGeolocationGateway {
    GoogleGeolocationGateway::new(&GeocodingConfig {
        base_url,
        api_key: "test-key".to_string(),
        timeout_secs,
    })
    .unwrap()
}

fn query(number: i64, street_name: &str) -> GeocodingQuery {
    GeocodingQuery {
        number,
        street_name: street_name.to_string(),
        city: "City".to_string(),
        state: "State".to_string(),
    }
}

#[tokio::test]
async fn sends_address_and_key_and_takes_first_result() {
    let (base_url, provider) = spawn_provider().await;
    let gateway = gateway(base_url, 5);

    let coordinates = gateway.get_coordinates(&query(321, "Street name")).await.unwrap();

    assert_eq!(coordinates, Coordinates::Found { latitude: 3.0, longitude: -3.0 });
    let seen = provider.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0]["address"], "321 Street name, City, State");
    assert_eq!(seen[0]["key"], "test-key");
}

#[tokio::test]
async fn empty_results_are_not_found() {
    let (base_url, _) = spawn_provider().await;

    let coordinates = gateway(base_url, 5)
        .get_coordinates(&query(9, "Nowhere road"))
        .await
        .unwrap();

    assert_eq!(coordinates, Coordinates::NotFound);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let (base_url, _) = spawn_provider().await;

    let err = gateway(base_url, 5)
        .get_coordinates(&query(500, "Broken street"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::GeocodingError(_)));
}

#[tokio::test]
async fn malformed_body_is_an_error() {
    let (base_url, _) = spawn_provider().await;

    let err = gateway(base_url, 5)
        .get_coordinates(&query(2, "Garbage street"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::HttpClientError(_)));
}

#[tokio::test]
async fn slow_provider_times_out() {
    let (base_url, _) = spawn_provider().await;

    let err = gateway(base_url, 1)
        .get_coordinates(&query(1, "Slow street"))
        .await
        .unwrap_err();

    match err {
        AppError::HttpClientError(err) => assert!(err.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[test]
fn endpoint_is_built_from_base_url() {
    let gateway = gateway("https://maps.googleapis.com/maps/api/".to_string(), 5);
    assert_eq!(gateway.endpoint(), "https://maps.googleapis.com/maps/api/geocode/json");
}
