//! Router-level tests over the full application

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::core::{ServerState, build_app};

fn app() -> Router {
    build_app(ServerState::for_tests())
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn booking_form() -> Value {
    json!({
        "vehicleNumber": "11하1111",
        "serviceType": "정기 점검",
        "customerName": "홍길동",
        "phone": "010-0000-0000",
        "memo": ""
    })
}

/// A date far enough ahead to never be past, as "YYYY-MM-DD"
fn future_date() -> String {
    (chrono::Utc::now().date_naive() + chrono::Days::new(30))
        .format("%Y-%m-%d")
        .to_string()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, "GET", "/health/detailed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["booking_storage"]["status"], "ok");
}

#[tokio::test]
async fn test_customer_day_view_is_masked() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/booking/day/2026-01-12", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let slots = body["data"].as_array().unwrap();
    assert_eq!(slots.len(), 8);
    assert_eq!(slots[0]["time"], "10:00");
    assert_eq!(slots[0]["status"], "CONFIRMED");
    assert_eq!(slots[0]["vehicleNumber"], "12루***4");
    assert!(slots[0].get("customerName").is_none());
    assert_eq!(slots[1]["status"], "AVAILABLE");
}

#[tokio::test]
async fn test_staff_day_view_is_unmasked() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/schedule/day/2026-01-12", None).await;
    assert_eq!(status, StatusCode::OK);

    let slots = body["data"].as_array().unwrap();
    let appointment = &slots[0]["appointment"];
    assert_eq!(appointment["vehicleNumber"], "12루1234");
    assert_eq!(appointment["customerName"], "김철수");
    assert_eq!(appointment["phone"], "010-1234-5678");
}

#[tokio::test]
async fn test_double_booking_conflicts() {
    let app = app();
    let uri = format!("/api/booking/day/{}/11:00", future_date());

    let (status, body) = send(&app, "POST", &uri, Some(booking_form())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "REQUESTED");

    let (status, body) = send(&app, "POST", &uri, Some(booking_form())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 4002);
}

#[tokio::test]
async fn test_confirm_available_slot_is_invalid_transition() {
    let app = app();
    let uri = format!("/api/schedule/day/{}/15:00/confirm", future_date());
    let (status, body) = send(&app, "POST", &uri, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_customer_past_date_rejected() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/booking/day/2020-01-01/10:00",
        Some(booking_form()),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], 4003);
}

#[tokio::test]
async fn test_malformed_date_and_time_rejected() {
    let app = app();
    let (status, _) = send(&app, "GET", "/api/booking/day/not-a-date", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let uri = format!("/api/booking/day/{}/10:30", future_date());
    let (status, _) = send(&app, "POST", &uri, Some(booking_form())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_request_confirm_cancel_flow() {
    let app = app();
    let date = future_date();

    let uri = format!("/api/booking/day/{date}/14:00");
    let (status, _) = send(&app, "POST", &uri, Some(booking_form())).await;
    assert_eq!(status, StatusCode::OK);

    let confirm_uri = format!("/api/schedule/day/{date}/14:00/confirm");
    let (status, body) = send(&app, "POST", &confirm_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "CONFIRMED");

    // The customer may not cancel a confirmed appointment
    let cancel_uri = format!("/api/booking/day/{date}/14:00");
    let (status, _) = send(&app, "DELETE", &cancel_uri, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Staff may
    let staff_cancel = format!("/api/schedule/day/{date}/14:00");
    let (status, _) = send(&app, "DELETE", &staff_cancel, None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", &format!("/api/booking/day/{date}"), None).await;
    let slots = body["data"].as_array().unwrap();
    assert!(slots.iter().all(|s| s["status"] == "AVAILABLE"));
}

#[tokio::test]
async fn test_month_calendar_shapes() {
    let app = app();
    let (status, body) = send(&app, "GET", "/api/schedule/calendar/2024/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["cells"].as_array().unwrap().len(), 29);

    let (_, body) = send(&app, "GET", "/api/schedule/calendar/2023/2", None).await;
    assert_eq!(body["data"]["cells"].as_array().unwrap().len(), 28);

    let (status, _) = send(&app, "GET", "/api/schedule/calendar/2026/13", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_auth_session_flow() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        Some(json!({"provider": "kakao"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["provider"], "kakao");
    assert_eq!(body["data"]["name"], "카카오 사용자");

    let (status, body) = send(&app, "GET", "/api/auth/me", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "user@kakao.com");

    let (status, body) = send(&app, "POST", "/api/auth/logout", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], true);

    let (status, _) = send(&app, "GET", "/api/auth/me", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_favorites_toggle() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/favorites/shop1/toggle", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], true);

    let (_, body) = send(&app, "GET", "/api/favorites", None).await;
    assert_eq!(body["data"], json!(["shop1"]));

    let (_, body) = send(&app, "POST", "/api/favorites/shop1/toggle", None).await;
    assert_eq!(body["data"], false);

    let (status, _) = send(&app, "POST", "/api/favorites/shop99/toggle", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_shop_search() {
    let app = app();

    let (_, body) = send(&app, "GET", "/api/shops", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 8);

    let (_, body) = send(&app, "GET", "/api/shops?region=%EB%B6%80%EC%82%B0", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, "GET", "/api/shops/shop3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "부산모터스");

    let (status, _) = send(&app, "GET", "/api/shops/shop99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sales_month_filter_and_create() {
    let app = app();

    let (_, body) = send(&app, "GET", "/api/sales?month=2026-01", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (_, body) = send(&app, "GET", "/api/sales?month=2026-02", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    let (status, _) = send(&app, "GET", "/api/sales?month=2026-13", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/api/sales",
        Some(json!({
            "sale_date": "2026-02-03",
            "amount": 180000,
            "payment_type": "CARD",
            "car_number": "22모2222",
            "customer_name": "테스트",
            "memo": null
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["amount"], 180000);

    let (_, body) = send(&app, "GET", "/api/sales?month=2026-02", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_receivable_collection_cycle() {
    let app = app();

    let (status, body) = send(&app, "POST", "/api/receivables/1/collect", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["paid"], true);

    let (status, body) = send(&app, "POST", "/api/receivables/1/reopen", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["paid"], false);

    let (status, body) = send(&app, "POST", "/api/receivables/99/collect", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 5002);
}

#[tokio::test]
async fn test_dashboard_report_and_trends() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api/dashboard/report/2026-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalSales"], 720000);
    assert_eq!(body["data"]["netProfit"], -430000);

    let (status, body) = send(&app, "GET", "/api/dashboard/trends/2026", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sales"].as_array().unwrap().len(), 12);

    let (status, _) = send(&app, "GET", "/api/dashboard/summary", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_payroll_and_maintenance() {
    let app = app();

    let (_, body) = send(&app, "GET", "/api/payroll?month=2025-12", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(&app, "GET", "/api/payroll/employees", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = send(
        &app,
        "GET",
        "/api/maintenance?vehicle=12%EB%A3%A81234",
        None,
    )
    .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}
