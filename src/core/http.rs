//! HTTP endpoint server using Axum

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{NaiveDate, Weekday};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

use crate::calendar::{MarketCalendar, TradingDayError};
use crate::config;
use crate::scanner::ScanOrchestrator;
use crate::services::kite::KiteHistoricalClient;

#[derive(Clone)]
pub struct AppState {
    pub scanner: Arc<ScanOrchestrator>,
    pub calendar: Arc<MarketCalendar>,
    pub start_time: Arc<Instant>,
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": "ok",
        "uptime_seconds": uptime_seconds,
        "service": "niftyscan"
    })))
}

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    date: Option<String>,
}

/// Run the scan for a requested date.
///
/// Trading-day validation happens entirely here; the scan core is never
/// invoked for a rejected date. All outcomes are 200s with a `status`
/// discriminator in the body, which the frontend switches on.
pub async fn scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Json<Value> {
    let Some(date_str) = request.date.filter(|d| !d.is_empty()) else {
        return Json(json!({
            "status": "invalid_date",
            "logs": ["No date received from frontend."]
        }));
    };

    let Ok(date) = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d") else {
        return Json(json!({
            "status": "invalid_date",
            "logs": [format!("Unparseable date: {date_str}")]
        }));
    };

    if let Err(rejection) = state.calendar.validate(date) {
        info!(date = %date, reason = %rejection, "scan request rejected");
        return Json(rejection_body(date, rejection));
    }

    let outcome = state.scanner.run(date).await;

    if !outcome.fetched_any() {
        return Json(json!({
            "status": "no_data",
            "logs": outcome.logs,
        }));
    }

    let mut body = serde_json::to_value(&outcome).unwrap_or_else(|_| json!({}));
    if let Some(object) = body.as_object_mut() {
        object.insert("status".to_string(), json!("ok"));
    }
    Json(body)
}

fn rejection_body(date: NaiveDate, rejection: TradingDayError) -> Value {
    match rejection {
        TradingDayError::OutOfRange(..) => json!({
            "status": "invalid_date",
            "logs": [
                format!("Invalid date selected: {date}"),
                "Please select a date between 2020 and today.",
            ]
        }),
        TradingDayError::Weekend(_, weekday) => {
            let day_name = if weekday == Weekday::Sat {
                "Saturday"
            } else {
                "Sunday"
            };
            json!({
                "status": "closed",
                "reason": day_name,
                "logs": [
                    format!("{date} is a {day_name}."),
                    "Indian stock markets are closed.",
                ]
            })
        }
        TradingDayError::Holiday(_) => json!({
            "status": "closed",
            "reason": "Holiday",
            "logs": [
                format!("{date} is an NSE trading holiday."),
                "No market data available.",
            ]
        }),
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/scan", post(scan))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let credentials = config::KiteCredentials::from_env()?;
    let client = KiteHistoricalClient::new(credentials);

    // A missing holiday file degrades holiday rejection, not the scan itself.
    let calendar = match MarketCalendar::from_file(config::get_holidays_path(), config::min_scan_date())
    {
        Ok(calendar) => calendar,
        Err(e) => {
            warn!(error = %e, "failed to load NSE holiday file; holiday checks disabled");
            MarketCalendar::new(HashSet::new(), config::min_scan_date())
        }
    };

    let state = AppState {
        scanner: Arc::new(ScanOrchestrator::new(Arc::new(client))),
        calendar: Arc::new(calendar),
        start_time: Arc::new(Instant::now()),
    };

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
