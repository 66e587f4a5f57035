//! Client and pipeline tests against a local estimation service

use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use estimo_client::{
    estimate_price_per_square_meter, estimate_valuation, ErrorKind, Estimation, EstimationClient,
    ServiceConfig,
};
use estimo_query::{compile, BuildingType, City, FilterSet, Ownership, RoomCount};
use serde_json::{json, Value};

const YEAR: i32 = 2024;

type Captured = Arc<Mutex<Vec<Value>>>;

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: String) -> EstimationClient {
    EstimationClient::new(ServiceConfig::with_base_url(base_url)).unwrap()
}

async fn fixed_service(buckets: Value, valuation: Value) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));

    let router = Router::new()
        .route(
            "/get-price-per-square-meters/",
            post({
                let buckets = buckets.clone();
                move |State(seen): State<Captured>, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(body);
                    Json(buckets)
                }
            }),
        )
        .route(
            "/property-price-valuation/",
            post({
                let valuation = valuation.clone();
                move |State(seen): State<Captured>, Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(body);
                    Json(valuation)
                }
            }),
        )
        .with_state(captured.clone());

    (spawn(router).await, captured)
}

fn buckets() -> Value {
    json!({
        "min_prices_per_square_meter": [3000.0, 3800.0, 4600.0, 5400.0],
        "max_prices_per_square_meter": [3400.0, 4200.0, 5000.0, 5800.0],
        "transactions": [4, 7, 3, 2]
    })
}

fn valuation() -> Value {
    json!({"mean": 300000.0, "standard_deviation": 50000.0, "sample_size": 87})
}

#[tokio::test]
async fn test_price_per_square_meter_round_trip() {
    let (url, captured) = fixed_service(buckets(), valuation()).await;
    let filters = FilterSet::defaults_for_year(YEAR)
        .with_postal_codes("00100")
        .with_cities([City::Helsinki])
        .with_rooms([RoomCount::Two])
        .with_building_types([BuildingType::Apartment]);

    let outcome = estimate_price_per_square_meter(&client(url), &filters, YEAR)
        .await
        .unwrap();

    assert_eq!(outcome.summary.sample_size, 16);
    assert_eq!(outcome.summary.stats.median, 4400.0);
    assert_eq!(outcome.chart.traces[0].points.len(), 500);

    let seen = captured.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let expected: Vec<Value> = compile(&filters)
        .unwrap()
        .render()
        .into_iter()
        .map(Value::String)
        .collect();
    assert_eq!(seen[0]["where_clause"], Value::Array(expected));
    assert_eq!(seen[0]["where_clause"][0], "postal_code in ('00100')");
}

#[tokio::test]
async fn test_valuation_round_trip() {
    let (url, _) = fixed_service(buckets(), valuation()).await;
    let filters = FilterSet::defaults_for_year(YEAR).with_ownership([Ownership::Unknown]);

    let outcome = estimate_valuation(&client(url), &filters, YEAR)
        .await
        .unwrap();

    let curve = &outcome.chart.traces[0];
    assert_eq!(curve.points.first().unwrap().x, 150_000.0);
    assert_eq!(curve.points.last().unwrap().x, 450_000.0);
    assert_eq!(outcome.lines()[0].text, "The most likely price for the property is €300k");
}

#[tokio::test]
async fn test_small_sample() {
    let small = json!({
        "min_prices_per_square_meter": [3000.0, 4000.0],
        "max_prices_per_square_meter": [3500.0, 4500.0],
        "transactions": [2, 1]
    });
    let (url, _) = fixed_service(small, valuation()).await;

    let err = estimate_price_per_square_meter(&client(url), &FilterSet::defaults_for_year(YEAR), YEAR)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InsufficientSample);
    assert!(err.user_message().contains("widen your filters"));
}

#[tokio::test]
async fn test_validation_stops_before_request() {
    let (url, captured) = fixed_service(buckets(), valuation()).await;
    let filters = FilterSet::defaults_for_year(YEAR).with_postal_codes("00100, abcde");

    let err = estimate_price_per_square_meter(&client(url), &filters, YEAR)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_error_status_is_transport() {
    let router = Router::new().route(
        "/property-price-valuation/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = spawn(router).await;

    let err = estimate_valuation(&client(url), &FilterSet::defaults_for_year(YEAR), YEAR)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.user_message().starts_with("API call failed: HTTP 500"));
}

#[tokio::test]
async fn test_raw_submission() {
    let (url, _) = fixed_service(buckets(), valuation()).await;
    let predicate = compile(&FilterSet::defaults_for_year(YEAR)).unwrap();

    let raw = client(url)
        .submit_raw(&predicate, Estimation::Valuation)
        .await
        .unwrap();
    assert_eq!(raw.status, 200);
    assert!(raw.body.contains("standard_deviation"));
}

#[tokio::test]
async fn test_count_overflow_is_response_shape() {
    let huge = json!({
        "min_prices_per_square_meter": [3000.0, 4000.0],
        "max_prices_per_square_meter": [3500.0, 4500.0],
        "transactions": [u64::MAX, 1u64]
    });
    let (url, _) = fixed_service(huge, valuation()).await;

    let err = estimate_price_per_square_meter(&client(url), &FilterSet::defaults_for_year(YEAR), YEAR)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseShape);
}

#[tokio::test]
async fn test_missing_route_is_transport() {
    let url = spawn(Router::new()).await;
    let predicate = compile(&FilterSet::defaults_for_year(YEAR)).unwrap();

    let err = client(url)
        .submit_raw(&predicate, Estimation::PricePerSquareMeter)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_malformed_body_is_response_shape() {
    let router = Router::new().route(
        "/property-price-valuation/",
        post(|| async { "not json at all" }),
    );
    let url = spawn(router).await;

    let err = estimate_valuation(&client(url), &FilterSet::defaults_for_year(YEAR), YEAR)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseShape);
}

#[tokio::test]
async fn test_wrong_shape_is_response_shape() {
    let (url, _) = fixed_service(valuation(), valuation()).await;

    let err = estimate_price_per_square_meter(&client(url), &FilterSet::defaults_for_year(YEAR), YEAR)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ResponseShape);
}

#[tokio::test]
async fn test_connection_refused_is_transport() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = estimate_valuation(
        &client(format!("http://{}", addr)),
        &FilterSet::defaults_for_year(YEAR),
        YEAR,
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    match err {
        estimo_client::EstimateError::Transport { message } => assert!(!message.is_empty()),
        other => panic!("expected transport error, got {:?}", other),
    }
}
