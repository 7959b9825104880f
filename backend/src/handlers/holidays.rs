use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::AppError,
    models::HolidayResponse,
    services::holiday_source,
    state::AppState,
    validation::{MAX_YEAR, MIN_YEAR},
};

use super::common::resolve_year;

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct HolidayQuery {
    #[validate(range(min = MIN_YEAR, max = MAX_YEAR))]
    pub year: Option<i32>,
    #[validate(range(min = 1, max = 12))]
    pub month: Option<u32>,
}

pub async fn list_holidays(
    State(state): State<AppState>,
    Query(query): Query<HolidayQuery>,
) -> Result<Json<Vec<HolidayResponse>>, AppError> {
    query.validate()?;

    let year = resolve_year(query.year, &state.config.time_zone);
    let holidays =
        holiday_source::load_holidays(state.holiday_source.as_ref(), year, query.month).await;

    Ok(Json(
        holidays
            .into_iter()
            .map(HolidayResponse::from)
            .collect::<Vec<_>>(),
    ))
}
