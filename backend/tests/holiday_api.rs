mod support;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use liburku_backend::{
    app::build_router, config::Config, services::holiday_source::HolidaySourceStub,
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;

fn test_router(stub: HolidaySourceStub) -> Router {
    build_router(AppState::new(Config::default(), Arc::new(stub)))
}

fn router_2099() -> Router {
    test_router(HolidaySourceStub::new(support::raw_holidays_2099()))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("call router");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse json body");
    (status, json)
}

fn items(body: &Value) -> &Vec<Value> {
    body.get("items")
        .and_then(Value::as_array)
        .expect("items array")
}

#[tokio::test]
async fn holidays_are_sorted_formatted_and_filtered() {
    let (status, body) = get_json(router_2099(), "/api/holidays?year=2099").await;
    assert_eq!(status, StatusCode::OK);

    let holidays = body.as_array().expect("holiday array");
    assert_eq!(holidays.len(), 3);
    assert_eq!(holidays[0]["date"], "2099-01-01");
    assert_eq!(holidays[0]["formatted_date"], "Kamis, 1 Januari 2099");
    assert_eq!(holidays[0]["kind"], "national");
    assert_eq!(holidays[0]["kind_label"], "Hari Libur Nasional");
    assert_eq!(holidays[1]["is_collective_leave"], true);
    assert_eq!(holidays[1]["kind"], "collective_leave");
    assert_eq!(holidays[1]["kind_label"], "Cuti Bersama");
    assert_eq!(holidays[2]["description"], "Hari Lahir Pancasila");
}

#[tokio::test]
async fn holidays_can_be_limited_to_one_month() {
    let (status, body) = get_json(router_2099(), "/api/holidays?year=2099&month=6").await;
    assert_eq!(status, StatusCode::OK);

    let holidays = body.as_array().expect("holiday array");
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0]["formatted_date"], "Senin, 1 Juni 2099");
}

#[tokio::test]
async fn holidays_reject_out_of_range_month() {
    let (status, body) = get_json(router_2099(), "/api/holidays?year=2099&month=13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn long_weekends_merge_both_schedules_by_default() {
    let (status, body) = get_json(router_2099(), "/api/long-weekends?year=2099").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2099);
    assert!(body.get("policy").is_none());

    let items = items(&body);
    let spans: Vec<(&str, &str, &str)> = items
        .iter()
        .map(|item| {
            (
                item["start_date"].as_str().unwrap_or_default(),
                item["end_date"].as_str().unwrap_or_default(),
                item["category"].as_str().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        spans,
        vec![
            ("2099-01-01", "2099-01-04", "potential"),
            ("2099-04-04", "2099-04-07", "potential"),
            ("2099-04-05", "2099-04-07", "potential"),
            ("2099-05-30", "2099-06-01", "confirmed"),
            ("2099-05-31", "2099-06-01", "confirmed"),
        ]
    );

    assert_eq!(items[0]["leave_suggestion"], "Ambil cuti pada hari Jumat");
    assert_eq!(items[0]["title"], "Potensi Libur Panjang");
    assert_eq!(items[0]["duration_days"], 4);
    assert_eq!(items[1]["leave_suggestion"], "Ambil cuti pada hari Senin");
    assert_eq!(items[3]["title"], "Libur Panjang Akhir Pekan");
    assert_eq!(items[3]["holiday_name"], "Hari Lahir Pancasila");
    assert!(items[3].get("leave_suggestion").is_none());
}

#[tokio::test]
async fn long_weekends_can_skip_collective_leave() {
    let (status, body) = get_json(
        router_2099(),
        "/api/long-weekends?year=2099&include_collective_leave=false",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items(&body).len(), 3);
}

#[tokio::test]
async fn long_weekends_follow_a_single_schedule() {
    let (status, body) = get_json(
        router_2099(),
        "/api/long-weekends?year=2099&saturday_is_workday=false",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["policy"]["saturday_is_workday"], false);
    assert_eq!(body["policy"]["include_collective_leave"], true);
    assert_eq!(items(&body).len(), 3);
}

#[tokio::test]
async fn long_weekends_reject_out_of_range_year() {
    let (status, body) = get_json(router_2099(), "/api/long-weekends?year=1800").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["errors"][0], "year: range");
}

#[tokio::test]
async fn long_weekends_are_empty_without_holidays() {
    let app = test_router(HolidaySourceStub::default());
    let (status, body) = get_json(app, "/api/long-weekends?year=2099").await;
    assert_eq!(status, StatusCode::OK);
    assert!(items(&body).is_empty());
}

#[tokio::test]
async fn inspiration_picks_an_upcoming_long_weekend() {
    let (status, body) = get_json(
        router_2099(),
        "/api/inspiration?year=2099&user_location=Bandung",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let theme = body["theme"].as_str().expect("theme");
    assert!(["Petualangan", "Relaksasi", "Kuliner", "Budaya"].contains(&theme));
    assert_eq!(body["trip_request"]["theme"], theme);
    assert_eq!(body["trip_request"]["user_location"], "Bandung");
    assert_eq!(
        body["trip_request"]["date_range"],
        body["long_weekend"]["date_range"]
    );
}

#[tokio::test]
async fn inspiration_reports_not_found_when_nothing_is_left() {
    let app = test_router(HolidaySourceStub::default());
    let (status, body) = get_json(app, "/api/inspiration?year=2099").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(
        body["error"],
        "Tidak ada potensi libur panjang di sisa tahun 2099."
    );
}

#[tokio::test]
async fn inspiration_rejects_invalid_location() {
    let (status, body) = get_json(
        router_2099(),
        "/api/inspiration?year=2099&user_location=%3Cscript%3E",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn time_zone_endpoint_reports_configured_zone() {
    let (status, body) = get_json(router_2099(), "/api/config/time-zone").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["time_zone"], "Asia/Jakarta");
}
