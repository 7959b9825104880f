use rand::{seq::SliceRandom, Rng};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::LongWeekendOpportunity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Theme {
    Petualangan,
    Relaksasi,
    Kuliner,
    Budaya,
}

impl Theme {
    pub const ALL: [Theme; 4] = [
        Theme::Petualangan,
        Theme::Relaksasi,
        Theme::Kuliner,
        Theme::Budaya,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Petualangan => "Petualangan",
            Theme::Relaksasi => "Relaksasi",
            Theme::Kuliner => "Kuliner",
            Theme::Budaya => "Budaya",
        }
    }
}

/// Parameters handed to the trip-suggestion generator for one long weekend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TripRequest {
    pub holiday_name: String,
    pub duration_days: i64,
    pub date_range: String,
    pub theme: Theme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<String>,
}

impl TripRequest {
    pub fn new(
        opportunity: &LongWeekendOpportunity,
        theme: Theme,
        user_location: Option<String>,
    ) -> Self {
        Self {
            holiday_name: opportunity.holiday_name(),
            duration_days: opportunity.duration_days,
            date_range: opportunity.date_range(),
            theme,
            user_location: user_location.filter(|location| !location.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Inspiration {
    pub opportunity: LongWeekendOpportunity,
    pub theme: Theme,
}

/// Picks one opportunity and one theme at random.
pub fn pick_inspiration<R: Rng + ?Sized>(
    opportunities: &[LongWeekendOpportunity],
    rng: &mut R,
) -> Option<Inspiration> {
    let opportunity = opportunities.choose(rng)?.clone();
    let theme = *Theme::ALL.choose(rng)?;
    Some(Inspiration { opportunity, theme })
}
