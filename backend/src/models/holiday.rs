use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::calendar;

/// Holiday entry exactly as the upstream calendar API returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RawHoliday {
    pub tanggal: String,
    pub keterangan: String,
    #[serde(default)]
    pub is_cuti: bool,
}

impl RawHoliday {
    pub fn new(tanggal: impl Into<String>, keterangan: impl Into<String>, is_cuti: bool) -> Self {
        Self {
            tanggal: tanggal.into(),
            keterangan: keterangan.into(),
            is_cuti,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHoliday {
    #[error("unparsable holiday date")]
    Date,
    #[error("blank holiday description")]
    Description,
}

/// A validated holiday: a local calendar day plus its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub date: NaiveDate,
    pub description: String,
    pub is_collective_leave: bool,
}

impl HolidayRecord {
    pub fn new(date: NaiveDate, description: impl Into<String>, is_collective_leave: bool) -> Self {
        Self {
            date,
            description: description.into(),
            is_collective_leave,
        }
    }

    pub fn kind(&self) -> HolidayKind {
        if self.is_collective_leave {
            HolidayKind::CollectiveLeave
        } else {
            HolidayKind::National
        }
    }
}

impl TryFrom<RawHoliday> for HolidayRecord {
    type Error = InvalidHoliday;

    fn try_from(value: RawHoliday) -> Result<Self, Self::Error> {
        let date = calendar::parse_holiday_date(&value.tanggal).ok_or(InvalidHoliday::Date)?;
        let description = value.keterangan.trim();
        if description.is_empty() {
            return Err(InvalidHoliday::Description);
        }
        Ok(Self::new(date, description, value.is_cuti))
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    National,
    CollectiveLeave,
}

impl HolidayKind {
    /// Legend label shown next to the calendar.
    pub fn label(&self) -> &'static str {
        match self {
            HolidayKind::National => "Hari Libur Nasional",
            HolidayKind::CollectiveLeave => "Cuti Bersama",
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HolidayResponse {
    pub date: NaiveDate,
    pub formatted_date: String,
    pub description: String,
    pub kind: HolidayKind,
    /// Calendar legend text for `kind`.
    pub kind_label: String,
    pub is_collective_leave: bool,
}

impl From<HolidayRecord> for HolidayResponse {
    fn from(value: HolidayRecord) -> Self {
        Self {
            formatted_date: calendar::format_date(value.date),
            kind: value.kind(),
            kind_label: value.kind().label().to_string(),
            date: value.date,
            description: value.description,
            is_collective_leave: value.is_collective_leave,
        }
    }
}
