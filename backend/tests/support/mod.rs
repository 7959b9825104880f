#![allow(dead_code)]
use chrono::NaiveDate;
use liburku_backend::models::{HolidayRecord, RawHoliday};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn holiday(year: i32, month: u32, day: u32, name: &str) -> HolidayRecord {
    HolidayRecord::new(date(year, month, day), name, false)
}

pub fn cuti(year: i32, month: u32, day: u32, name: &str) -> HolidayRecord {
    HolidayRecord::new(date(year, month, day), name, true)
}

/// National holidays and collective leave days of 2025 (SKB 3 Menteri).
pub fn holidays_2025() -> Vec<HolidayRecord> {
    vec![
        holiday(2025, 1, 1, "Tahun Baru 2025 Masehi"),
        holiday(2025, 1, 27, "Isra Mikraj Nabi Muhammad SAW"),
        cuti(2025, 1, 28, "Cuti Bersama Tahun Baru Imlek"),
        holiday(2025, 1, 29, "Tahun Baru Imlek 2576 Kongzili"),
        cuti(2025, 3, 28, "Cuti Bersama Hari Suci Nyepi"),
        holiday(2025, 3, 29, "Hari Suci Nyepi"),
        holiday(2025, 3, 31, "Hari Raya Idul Fitri 1446 H"),
        holiday(2025, 4, 1, "Hari Raya Idul Fitri 1446 H (Hari Kedua)"),
        cuti(2025, 4, 2, "Cuti Bersama Idul Fitri"),
        cuti(2025, 4, 3, "Cuti Bersama Idul Fitri"),
        cuti(2025, 4, 4, "Cuti Bersama Idul Fitri"),
        cuti(2025, 4, 7, "Cuti Bersama Idul Fitri"),
        holiday(2025, 4, 18, "Wafat Yesus Kristus"),
        holiday(2025, 4, 20, "Kebangkitan Yesus Kristus (Paskah)"),
        holiday(2025, 5, 1, "Hari Buruh Internasional"),
        holiday(2025, 5, 12, "Hari Raya Waisak 2569 BE"),
        cuti(2025, 5, 13, "Cuti Bersama Waisak"),
        holiday(2025, 5, 29, "Kenaikan Yesus Kristus"),
        cuti(2025, 5, 30, "Cuti Bersama Kenaikan Yesus Kristus"),
        holiday(2025, 6, 1, "Hari Lahir Pancasila"),
        holiday(2025, 6, 6, "Hari Raya Idul Adha 1446 H"),
        cuti(2025, 6, 9, "Cuti Bersama Idul Adha"),
        holiday(2025, 6, 27, "Tahun Baru Islam 1447 H"),
        holiday(2025, 8, 17, "Hari Kemerdekaan Republik Indonesia"),
        holiday(2025, 9, 5, "Maulid Nabi Muhammad SAW"),
        holiday(2025, 12, 25, "Hari Raya Natal"),
        cuti(2025, 12, 26, "Cuti Bersama Hari Raya Natal"),
    ]
}

/// Upstream payload for a year far enough ahead that every entry is upcoming.
///
/// 2099-01-01 is a Thursday, 2099-04-07 a Tuesday, 2099-06-01 a Monday.
pub fn raw_holidays_2099() -> Vec<RawHoliday> {
    vec![
        RawHoliday::new("2099-6-1", "Hari Lahir Pancasila", false),
        RawHoliday::new("2099-1-1", "Tahun Baru Masehi", false),
        RawHoliday::new("2099-4-7", "Cuti Bersama", true),
        RawHoliday::new("2099-02-30", "Tanggal Rusak", false),
    ]
}
