use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::calendar;

/// Which days of the week count as non-working, and whether collective
/// leave ("cuti bersama") days are treated as holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct WorkWeekPolicy {
    pub saturday_is_workday: bool,
    pub include_collective_leave: bool,
}

impl WorkWeekPolicy {
    /// Monday to Friday.
    pub const fn five_day_week() -> Self {
        Self {
            saturday_is_workday: false,
            include_collective_leave: true,
        }
    }

    /// Monday to Saturday.
    pub const fn six_day_week() -> Self {
        Self {
            saturday_is_workday: true,
            include_collective_leave: true,
        }
    }

    pub const fn with_collective_leave(self, include: bool) -> Self {
        Self {
            include_collective_leave: include,
            ..self
        }
    }

    /// Shortest run of off days that still counts as a long weekend.
    pub const fn min_confirmed_days(&self) -> i64 {
        if self.saturday_is_workday {
            2
        } else {
            3
        }
    }
}

impl Default for WorkWeekPolicy {
    fn default() -> Self {
        Self::five_day_week()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityCategory {
    /// Already fully off, no leave needed.
    Confirmed,
    /// Needs one day of leave to bridge the gap.
    Potential,
}

impl OpportunityCategory {
    pub fn title(&self) -> &'static str {
        match self {
            OpportunityCategory::Confirmed => "Libur Panjang Akhir Pekan",
            OpportunityCategory::Potential => "Potensi Libur Panjang",
        }
    }
}

pub type OpportunityKey = (NaiveDate, NaiveDate, Option<String>);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongWeekendOpportunity {
    pub category: OpportunityCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: i64,
    pub holiday_names: Vec<String>,
    pub leave_day: Option<Weekday>,
    pub leave_suggestion: Option<String>,
}

impl LongWeekendOpportunity {
    pub fn confirmed(start_date: NaiveDate, end_date: NaiveDate, holiday_names: Vec<String>) -> Self {
        Self {
            category: OpportunityCategory::Confirmed,
            start_date,
            end_date,
            duration_days: calendar::days_inclusive(start_date, end_date),
            holiday_names,
            leave_day: None,
            leave_suggestion: None,
        }
    }

    pub fn potential(
        start_date: NaiveDate,
        end_date: NaiveDate,
        holiday_names: Vec<String>,
        leave_day: Weekday,
    ) -> Self {
        Self {
            category: OpportunityCategory::Potential,
            start_date,
            end_date,
            duration_days: calendar::days_inclusive(start_date, end_date),
            holiday_names,
            leave_day: Some(leave_day),
            leave_suggestion: Some(leave_suggestion_for(leave_day)),
        }
    }

    pub fn title(&self) -> &'static str {
        self.category.title()
    }

    pub fn holiday_name(&self) -> String {
        self.holiday_names.join(", ")
    }

    pub fn date_range(&self) -> String {
        calendar::format_date_range(self.start_date, self.end_date)
    }

    /// Two opportunities with the same key describe the same trip.
    pub fn dedup_key(&self) -> OpportunityKey {
        (self.start_date, self.end_date, self.leave_suggestion.clone())
    }
}

pub fn leave_suggestion_for(day: Weekday) -> String {
    format!("Ambil cuti pada hari {}", calendar::day_name(day))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LongWeekendResponse {
    pub title: String,
    pub category: OpportunityCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: i64,
    pub holiday_names: Vec<String>,
    pub holiday_name: String,
    pub date_range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub leave_day: Option<Weekday>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_suggestion: Option<String>,
}

impl From<LongWeekendOpportunity> for LongWeekendResponse {
    fn from(value: LongWeekendOpportunity) -> Self {
        Self {
            title: value.title().to_string(),
            holiday_name: value.holiday_name(),
            date_range: value.date_range(),
            category: value.category,
            start_date: value.start_date,
            end_date: value.end_date,
            duration_days: value.duration_days,
            holiday_names: value.holiday_names,
            leave_day: value.leave_day,
            leave_suggestion: value.leave_suggestion,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LongWeekendListResponse {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<WorkWeekPolicy>,
    pub items: Vec<LongWeekendResponse>,
}
