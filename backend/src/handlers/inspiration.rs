use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::AppError,
    models::LongWeekendResponse,
    services::{
        holiday_source,
        inspiration::{self, Theme, TripRequest},
        long_weekend,
    },
    state::AppState,
    utils::time,
    validation::{rules, MAX_YEAR, MIN_YEAR},
};

use super::common::resolve_year;

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct InspirationQuery {
    #[validate(range(min = MIN_YEAR, max = MAX_YEAR))]
    pub year: Option<i32>,
    pub include_collective_leave: Option<bool>,
    #[validate(custom(function = "rules::validate_location"))]
    pub user_location: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InspirationResponse {
    pub long_weekend: LongWeekendResponse,
    pub theme: Theme,
    pub trip_request: TripRequest,
}

/// "Kejutkan Saya!": a random upcoming long weekend with a random theme.
pub async fn surprise_me(
    State(state): State<AppState>,
    Query(query): Query<InspirationQuery>,
) -> Result<Json<InspirationResponse>, AppError> {
    query.validate()?;

    let tz = state.config.time_zone;
    let year = resolve_year(query.year, &tz);
    let today = time::today_local(&tz);
    let holidays = holiday_source::load_holidays(state.holiday_source.as_ref(), year, None).await;

    let opportunities = long_weekend::analyze_all_schedules(
        &holidays,
        year,
        query.include_collective_leave.unwrap_or(true),
        today,
    );

    let picked = inspiration::pick_inspiration(&opportunities, &mut rand::thread_rng());
    let Some(picked) = picked else {
        return Err(AppError::NotFound(format!(
            "Tidak ada potensi libur panjang di sisa tahun {}.",
            year
        )));
    };

    let trip_request = TripRequest::new(&picked.opportunity, picked.theme, query.user_location);
    tracing::debug!(
        year,
        theme = picked.theme.as_str(),
        start = %picked.opportunity.start_date,
        "Picked inspiration"
    );

    Ok(Json(InspirationResponse {
        long_weekend: LongWeekendResponse::from(picked.opportunity),
        theme: picked.theme,
        trip_request,
    }))
}
