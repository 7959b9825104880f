#![allow(dead_code)] // OpenAPI doc stubs are only referenced by utoipa macros.

use crate::{
    error::ErrorResponse,
    handlers::{
        config::TimeZoneResponse,
        holidays::HolidayQuery,
        inspiration::{InspirationQuery, InspirationResponse},
        long_weekends::LongWeekendQuery,
    },
    models::{
        HolidayKind, HolidayResponse, LongWeekendListResponse, LongWeekendResponse,
        OpportunityCategory, WorkWeekPolicy,
    },
    services::inspiration::{Theme, TripRequest},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Liburku API", description = "Kalender hari libur & perencana libur panjang"),
    paths(
        list_holidays_doc,
        list_long_weekends_doc,
        inspiration_doc,
        time_zone_doc
    ),
    components(
        schemas(
            // holidays
            HolidayResponse,
            HolidayKind,
            // long weekends
            WorkWeekPolicy,
            OpportunityCategory,
            LongWeekendResponse,
            LongWeekendListResponse,
            // inspiration
            Theme,
            TripRequest,
            InspirationResponse,
            // misc
            TimeZoneResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Holidays", description = "Hari libur nasional dan cuti bersama"),
        (name = "LongWeekends", description = "Libur panjang dan harpitnas"),
        (name = "Config", description = "Konfigurasi aplikasi")
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    path = "/api/holidays",
    params(HolidayQuery),
    responses(
        (status = 200, description = "Daftar hari libur", body = [HolidayResponse]),
        (status = 400, description = "Parameter tidak valid", body = ErrorResponse)
    ),
    tag = "Holidays"
)]
fn list_holidays_doc() {}

#[utoipa::path(
    get,
    path = "/api/long-weekends",
    params(LongWeekendQuery),
    responses(
        (status = 200, description = "Libur panjang yang akan datang", body = LongWeekendListResponse),
        (status = 400, description = "Parameter tidak valid", body = ErrorResponse)
    ),
    tag = "LongWeekends"
)]
fn list_long_weekends_doc() {}

#[utoipa::path(
    get,
    path = "/api/inspiration",
    params(InspirationQuery),
    responses(
        (status = 200, description = "Inspirasi instan", body = InspirationResponse),
        (status = 404, description = "Tidak ada libur panjang tersisa", body = ErrorResponse)
    ),
    tag = "LongWeekends"
)]
fn inspiration_doc() {}

#[utoipa::path(
    get,
    path = "/api/config/time-zone",
    responses((status = 200, body = TimeZoneResponse)),
    tag = "Config"
)]
fn time_zone_doc() {}
