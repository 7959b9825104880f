use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::AppError,
    models::{LongWeekendListResponse, LongWeekendResponse, WorkWeekPolicy},
    services::{holiday_source, long_weekend},
    state::AppState,
    utils::time,
    validation::{MAX_YEAR, MIN_YEAR},
};

use super::common::resolve_year;

#[derive(Debug, Deserialize, Validate, IntoParams)]
pub struct LongWeekendQuery {
    #[validate(range(min = MIN_YEAR, max = MAX_YEAR))]
    pub year: Option<i32>,
    /// Omit to merge the five-day and six-day week results.
    pub saturday_is_workday: Option<bool>,
    /// Defaults to `true` (civil servant calendar).
    pub include_collective_leave: Option<bool>,
}

impl LongWeekendQuery {
    fn policy(&self) -> Option<WorkWeekPolicy> {
        let include_collective_leave = self.include_collective_leave.unwrap_or(true);
        self.saturday_is_workday.map(|saturday_is_workday| WorkWeekPolicy {
            saturday_is_workday,
            include_collective_leave,
        })
    }
}

pub async fn list_long_weekends(
    State(state): State<AppState>,
    Query(query): Query<LongWeekendQuery>,
) -> Result<Json<LongWeekendListResponse>, AppError> {
    query.validate()?;

    let tz = state.config.time_zone;
    let year = resolve_year(query.year, &tz);
    let today = time::today_local(&tz);
    let holidays = holiday_source::load_holidays(state.holiday_source.as_ref(), year, None).await;

    let policy = query.policy();
    let opportunities = match policy {
        Some(policy) => long_weekend::analyze(&holidays, year, policy, today),
        None => long_weekend::analyze_all_schedules(
            &holidays,
            year,
            query.include_collective_leave.unwrap_or(true),
            today,
        ),
    };

    let (confirmed, potential) = long_weekend::category_counts(&opportunities);
    tracing::info!(year, confirmed, potential, "Computed long weekends");

    Ok(Json(LongWeekendListResponse {
        year,
        policy,
        items: opportunities
            .into_iter()
            .map(LongWeekendResponse::from)
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::{config::Config, models::RawHoliday, services::holiday_source::MockHolidaySource};

    #[test]
    fn policy_is_none_without_saturday_flag() {
        let query = LongWeekendQuery {
            year: Some(2025),
            saturday_is_workday: None,
            include_collective_leave: Some(false),
        };
        assert!(query.policy().is_none());
    }

    #[test]
    fn policy_defaults_to_including_collective_leave() {
        let query = LongWeekendQuery {
            year: None,
            saturday_is_workday: Some(true),
            include_collective_leave: None,
        };
        assert_eq!(query.policy(), Some(WorkWeekPolicy::six_day_week()));
    }

    #[test]
    fn year_out_of_range_fails_validation() {
        let query = LongWeekendQuery {
            year: Some(1800),
            saturday_is_workday: None,
            include_collective_leave: None,
        };
        assert!(query.validate().is_err());
    }

    #[tokio::test]
    async fn list_long_weekends_fetches_requested_year() {
        let mut source = MockHolidaySource::new();
        source
            .expect_fetch()
            .withf(|year, month| *year == 2099 && month.is_none())
            .times(1)
            .returning(|_, _| {
                Ok(vec![RawHoliday::new("2099-6-1", "Hari Lahir Pancasila", false)])
            });
        let state = AppState::new(Config::default(), Arc::new(source));

        let Json(body) = list_long_weekends(
            State(state),
            Query(LongWeekendQuery {
                year: Some(2099),
                saturday_is_workday: Some(false),
                include_collective_leave: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(body.year, 2099);
        assert_eq!(body.policy, Some(WorkWeekPolicy::five_day_week()));
        assert_eq!(body.items.len(), 1);
        assert_eq!(
            body.items[0].start_date,
            NaiveDate::from_ymd_opt(2099, 5, 30).unwrap()
        );
        assert_eq!(body.items[0].holiday_name, "Hari Lahir Pancasila");
    }
}
