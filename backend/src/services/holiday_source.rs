use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use chrono::Datelike;
use reqwest::Client;
use serde_json::Value;
use tracing::Instrument;

use crate::models::{HolidayRecord, RawHoliday};

pub const DEFAULT_HOLIDAY_API_URL: &str = "https://dayoffapi.vercel.app/api";
const USER_AGENT: &str = "liburku-backend/1.0";

#[derive(Debug, thiserror::Error)]
pub enum HolidaySourceError {
    #[error("holiday request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("holiday API responded with status {0}")]
    Status(u16),
    #[error("holiday payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Supplier of the raw holiday list for a year (optionally one month).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch(
        &self,
        year: i32,
        month: Option<u32>,
    ) -> Result<Vec<RawHoliday>, HolidaySourceError>;
}

/// Client for the public Indonesian day-off API.
#[derive(Clone)]
pub struct DayOffApiSource {
    client: Client,
    base_url: String,
}

impl DayOffApiSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, HolidaySourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn query(year: i32, month: Option<u32>) -> Vec<(&'static str, String)> {
        let mut query = vec![("year", year.to_string())];
        if let Some(month) = month {
            query.push(("month", month.to_string()));
        }
        query
    }
}

#[async_trait]
impl HolidaySource for DayOffApiSource {
    async fn fetch(
        &self,
        year: i32,
        month: Option<u32>,
    ) -> Result<Vec<RawHoliday>, HolidaySourceError> {
        let span = tracing::debug_span!("holiday_api_fetch", year, ?month);

        async move {
            let response = self
                .client
                .get(&self.base_url)
                .query(&Self::query(year, month))
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(HolidaySourceError::Status(status.as_u16()));
            }

            let body = response.text().await?;
            decode_holiday_payload(&body)
        }
        .instrument(span)
        .await
    }
}

/// Decodes the upstream body. Anything other than a JSON array means the
/// source has nothing for the requested period.
pub fn decode_holiday_payload(body: &str) -> Result<Vec<RawHoliday>, HolidaySourceError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(items) = value else {
        tracing::debug!("Holiday payload is not an array; treating as empty");
        return Ok(Vec::new());
    };

    let mut holidays = Vec::with_capacity(items.len());
    for item in items {
        match serde_json::from_value::<RawHoliday>(item) {
            Ok(raw) => holidays.push(raw),
            Err(err) => tracing::warn!(error = %err, "Skipping malformed holiday entry"),
        }
    }
    Ok(holidays)
}

/// Validates raw entries into [`HolidayRecord`]s, dropping the ones that do
/// not parse, and orders them by date.
pub fn normalize_holidays(raw: Vec<RawHoliday>) -> Vec<HolidayRecord> {
    let mut records: Vec<HolidayRecord> = raw
        .into_iter()
        .filter_map(|entry| {
            let tanggal = entry.tanggal.clone();
            HolidayRecord::try_from(entry)
                .map_err(|err| {
                    tracing::warn!(tanggal = %tanggal, error = %err, "Dropping invalid holiday");
                })
                .ok()
        })
        .collect();

    records.sort_by_key(|record| record.date);
    records
}

/// Fetches and normalizes holidays. Upstream failures are logged and
/// reported as an empty list.
pub async fn load_holidays(
    source: &dyn HolidaySource,
    year: i32,
    month: Option<u32>,
) -> Vec<HolidayRecord> {
    match source.fetch(year, month).await {
        Ok(raw) => {
            let records = normalize_holidays(raw);
            // The upstream ignores `year` for some queries, so filter again.
            records
                .into_iter()
                .filter(|record| {
                    record.date.year() == year
                        && month.map_or(true, |month| record.date.month() == month)
                })
                .collect()
        }
        Err(err) => {
            tracing::warn!(year, ?month, error = %err, "Holiday source unavailable");
            Vec::new()
        }
    }
}

/// In-memory source with a fixed list, used by tests and offline runs.
#[derive(Clone, Default)]
pub struct HolidaySourceStub {
    holidays: Arc<Vec<RawHoliday>>,
}

impl HolidaySourceStub {
    pub fn new(holidays: impl IntoIterator<Item = RawHoliday>) -> Self {
        Self {
            holidays: Arc::new(holidays.into_iter().collect()),
        }
    }
}

#[async_trait]
impl HolidaySource for HolidaySourceStub {
    async fn fetch(
        &self,
        _year: i32,
        _month: Option<u32>,
    ) -> Result<Vec<RawHoliday>, HolidaySourceError> {
        Ok((*self.holidays).clone())
    }
}
