//! Availability endpoints for the listing page

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::NaiveDate;

use murakami_core::AvailabilityDay;
use murakami_core::availability::day_status;
use murakami_core::protocol::CalendarResponse;
use murakami_core::window::ForwardWindow;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/calendar", get(get_calendar))
        .route("/api/calendar/{date}", get(get_day))
}

/// GET /api/calendar - Feed events and available days, sorted by start
async fn get_calendar(State(state): State<AppState>) -> Result<Json<CalendarResponse>, AppError> {
    let now = state.now();
    let entries = state.entries(now).await?;

    Ok(Json(CalendarResponse::from_entries(&entries, now)))
}

/// GET /api/calendar/:date - Status and price for one YYYY-MM-DD date
async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<AvailabilityDay>, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("Invalid date '{}'. Expected YYYY-MM-DD", date)))?;

    let now = state.now();
    if !ForwardWindow::six_months_from(now).contains(date) {
        return Err(AppError::not_found(format!(
            "{} is outside the availability window",
            date
        )));
    }

    let entries = state.entries(now).await?;
    let pricing = state.synthesizer().pricing();

    Ok(Json(day_status(date, &entries, pricing)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::app;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use murakami_core::config::{FeedConfig, MurakamiConfig};
    use serde_json::Value;
    use std::io::Write;
    use std::path::PathBuf;
    use tower::ServiceExt;

    /// Fixed request time for every test: Sunday 1 June 2025, 09:00 UTC.
    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
    }

    fn ics_date(offset_days: i64) -> String {
        (fixed_now() + Duration::days(offset_days)).format("%Y%m%d").to_string()
    }

    fn iso_day(offset_days: i64) -> String {
        (fixed_now() + Duration::days(offset_days)).format("%Y-%m-%d").to_string()
    }

    /// Feed with one booking covering days +2, +3 and +4.
    fn write_feed() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let feed = format!(
            "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nUID:stay-1\r\nDTSTART;VALUE=DATE:{}\r\nDTEND;VALUE=DATE:{}\r\nSUMMARY:Reserved\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n",
            ics_date(2),
            ics_date(5)
        );
        file.write_all(feed.as_bytes()).unwrap();
        file
    }

    fn state_for(path: PathBuf, fallback_to_mock: bool) -> AppState {
        let mut config = MurakamiConfig {
            feed: FeedConfig {
                path: Some(path),
                ..FeedConfig::default()
            },
            ..MurakamiConfig::default()
        };
        config.server.fallback_to_mock = fallback_to_mock;
        AppState::new(config).unwrap().with_clock(fixed_now)
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn calendar_lists_bookings_and_available_days() {
        let feed = write_feed();
        let (status, body) = get_json(state_for(feed.path().to_path_buf(), false), "/api/calendar").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["lastUpdated"], "2025-06-01T09:00:00.000Z");

        let dates = body["bookedDates"].as_array().unwrap();
        let booked: Vec<_> = dates.iter().filter(|d| d["status"] == "booked").collect();
        assert_eq!(booked.len(), 1);
        assert_eq!(booked[0]["uid"], "stay-1");
        assert!(booked[0].get("price").is_none());

        let available_uids: Vec<&str> = dates
            .iter()
            .filter(|d| d["status"] == "available")
            .map(|d| d["uid"].as_str().unwrap())
            .collect();
        assert!(available_uids.contains(&format!("available-{}", iso_day(1)).as_str()));
        assert!(!available_uids.contains(&format!("available-{}", iso_day(3)).as_str()));
        assert!(available_uids.contains(&format!("available-{}", iso_day(5)).as_str()));

        let starts: Vec<&str> = dates.iter().map(|d| d["start"].as_str().unwrap()).collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted);
    }

    #[tokio::test]
    async fn fetch_failure_is_a_500_with_details() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) =
            get_json(state_for(dir.path().join("missing.ics"), false), "/api/calendar").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch calendar data");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn fallback_serves_mock_data_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) =
            get_json(state_for(dir.path().join("missing.ics"), true), "/api/calendar").await;

        assert_eq!(status, StatusCode::OK);
        let uids: Vec<&str> = body["bookedDates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["uid"].as_str().unwrap())
            .collect();
        assert_eq!(uids, ["mock-1", "mock-available-1", "mock-2"]);
    }

    #[tokio::test]
    async fn day_lookup_reports_status_and_price() {
        let feed = write_feed();
        let state = state_for(feed.path().to_path_buf(), false);

        let (status, body) = get_json(state.clone(), &format!("/api/calendar/{}", iso_day(3))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "booked");
        assert!(body.get("price").is_none());

        let (status, body) = get_json(state, &format!("/api/calendar/{}", iso_day(6))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "available");
        assert_eq!(body["date"], iso_day(6));
        // Saturday 7 June: base, weekend and June premiums
        assert_eq!(body["price"], 325);
    }

    #[tokio::test]
    async fn day_lookup_rejects_bad_and_out_of_window_dates() {
        let feed = write_feed();
        let state = state_for(feed.path().to_path_buf(), false);

        let (status, body) = get_json(state.clone(), "/api/calendar/June-15").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));

        let (status, _) = get_json(state, &format!("/api/calendar/{}", iso_day(400))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
