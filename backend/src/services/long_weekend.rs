//! Long weekend detection.
//!
//! Given one year of holidays and a [`WorkWeekPolicy`], finds the runs of
//! non-working days that are already long weekends ([`OpportunityCategory::Confirmed`])
//! and the ones a single day of leave would create ("harpitnas",
//! [`OpportunityCategory::Potential`]).
//!
//! The analysis is a pure function of its arguments. "Today" is passed in by
//! the caller so results never depend on the wall clock.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};

use crate::{
    models::{HolidayRecord, LongWeekendOpportunity, OpportunityCategory, WorkWeekPolicy},
    utils::calendar,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct CanonicalHoliday {
    name: String,
    is_collective_leave: bool,
}

/// The off-day calendar of one year under one policy.
#[derive(Debug, Clone)]
pub struct OffDayCalendar {
    policy: WorkWeekPolicy,
    holidays: BTreeMap<NaiveDate, CanonicalHoliday>,
}

impl OffDayCalendar {
    /// Keeps the holidays of `year` that the policy counts. When a date has
    /// both a statutory holiday and a collective leave entry, the statutory
    /// name wins; otherwise the first entry seen for a date wins.
    pub fn build(holidays: &[HolidayRecord], year: i32, policy: WorkWeekPolicy) -> Self {
        let mut by_date: BTreeMap<NaiveDate, CanonicalHoliday> = BTreeMap::new();

        let retained = holidays.iter().filter(|holiday| {
            holiday.date.year() == year
                && (policy.include_collective_leave || !holiday.is_collective_leave)
        });

        for holiday in retained {
            let candidate = CanonicalHoliday {
                name: holiday.description.clone(),
                is_collective_leave: holiday.is_collective_leave,
            };
            by_date
                .entry(holiday.date)
                .and_modify(|existing| {
                    if existing.is_collective_leave && !candidate.is_collective_leave {
                        *existing = candidate.clone();
                    }
                })
                .or_insert_with(|| candidate.clone());
        }

        Self {
            policy,
            holidays: by_date,
        }
    }

    pub fn policy(&self) -> WorkWeekPolicy {
        self.policy
    }

    /// The single definition of a non-working day.
    pub fn is_off_day(&self, date: NaiveDate) -> bool {
        match date.weekday() {
            Weekday::Sun => true,
            Weekday::Sat if !self.policy.saturday_is_workday => true,
            _ => self.holidays.contains_key(&date),
        }
    }

    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(|holiday| holiday.name.as_str())
    }

    pub fn holiday_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.keys().copied()
    }

    /// Holiday names inside `[start, end]`, in date order.
    pub fn names_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<String> {
        self.holidays
            .range(start..=end)
            .map(|(_, holiday)| holiday.name.clone())
            .collect()
    }

    /// Maximal run of off days around `date`.
    pub fn expand(&self, date: NaiveDate) -> (NaiveDate, NaiveDate) {
        let mut start = date;
        while let Some(previous) = start.pred_opt().filter(|d| self.is_off_day(*d)) {
            start = previous;
        }

        let mut end = date;
        while let Some(next) = end.succ_opt().filter(|d| self.is_off_day(*d)) {
            end = next;
        }

        (start, end)
    }

    fn upcoming(&self, today: NaiveDate) -> impl Iterator<Item = NaiveDate> + '_ {
        self.holidays.range(today..).map(|(date, _)| *date)
    }
}

/// Runs both passes for one policy and returns the merged, sorted result.
pub fn analyze(
    holidays: &[HolidayRecord],
    year: i32,
    policy: WorkWeekPolicy,
    today: NaiveDate,
) -> Vec<LongWeekendOpportunity> {
    let off_days = OffDayCalendar::build(holidays, year, policy);

    let confirmed = confirmed_spans(&off_days, today);
    let potential = bridge_day_spans(&off_days, today);

    tracing::debug!(
        year,
        saturday_is_workday = policy.saturday_is_workday,
        include_collective_leave = policy.include_collective_leave,
        holidays = off_days.holidays.len(),
        confirmed = confirmed.len(),
        potential = potential.len(),
        "analyzed long weekends"
    );

    merge_opportunities(confirmed.into_iter().chain(potential))
}

/// Runs [`analyze`] for a five-day and a six-day week and merges the two,
/// so every scenario a worker could be in is listed once.
pub fn analyze_all_schedules(
    holidays: &[HolidayRecord],
    year: i32,
    include_collective_leave: bool,
    today: NaiveDate,
) -> Vec<LongWeekendOpportunity> {
    let five_day = WorkWeekPolicy::five_day_week().with_collective_leave(include_collective_leave);
    let six_day = WorkWeekPolicy::six_day_week().with_collective_leave(include_collective_leave);

    merge_opportunities(
        analyze(holidays, year, five_day, today)
            .into_iter()
            .chain(analyze(holidays, year, six_day, today)),
    )
}

/// Keeps the first opportunity per `(start, end, leave suggestion)` and sorts
/// the survivors chronologically.
pub fn merge_opportunities<I>(opportunities: I) -> Vec<LongWeekendOpportunity>
where
    I: IntoIterator<Item = LongWeekendOpportunity>,
{
    let mut seen = HashSet::new();
    let mut merged: Vec<LongWeekendOpportunity> = opportunities
        .into_iter()
        .filter(|opportunity| seen.insert(opportunity.dedup_key()))
        .collect();

    merged.sort_by_key(|opportunity| {
        (
            opportunity.start_date,
            opportunity.end_date,
            opportunity.category,
            opportunity
                .leave_day
                .map(|day| day.num_days_from_monday()),
        )
    });
    merged
}

/// Pass 1: runs of off days that contain an upcoming holiday.
fn confirmed_spans(off_days: &OffDayCalendar, today: NaiveDate) -> Vec<LongWeekendOpportunity> {
    let min_days = off_days.policy().min_confirmed_days();
    let mut absorbed = BTreeSet::new();
    let mut spans = Vec::new();

    for date in off_days.upcoming(today) {
        if absorbed.contains(&date) {
            continue;
        }

        let (start, end) = off_days.expand(date);
        absorbed.extend(off_days.holidays.range(start..=end).map(|(d, _)| *d));

        if calendar::days_inclusive(start, end) >= min_days {
            spans.push(LongWeekendOpportunity::confirmed(
                start,
                end,
                off_days.names_between(start, end),
            ));
        }
    }

    spans
}

/// Pass 2: a holiday next to a lone working day that one day of leave turns
/// into a long weekend. Only these three shapes are recognised:
///
/// * Tuesday holiday, working Monday: weekend through Tuesday.
/// * Thursday holiday, working Friday (five-day week): Thursday through Sunday.
/// * Friday holiday, working Saturday (six-day week): Friday through Sunday.
fn bridge_day_spans(off_days: &OffDayCalendar, today: NaiveDate) -> Vec<LongWeekendOpportunity> {
    let policy = off_days.policy();
    let mut spans = Vec::new();

    for date in off_days.upcoming(today) {
        let bridge = match date.weekday() {
            Weekday::Tue => {
                let weekend_start = if policy.saturday_is_workday {
                    Weekday::Sun
                } else {
                    Weekday::Sat
                };
                calendar::previous_weekday_on_or_before(date, weekend_start)
                    .map(|start| (start, date, Weekday::Mon))
            }
            Weekday::Thu if !policy.saturday_is_workday => {
                calendar::shift(date, 3).map(|end| (date, end, Weekday::Fri))
            }
            Weekday::Fri if policy.saturday_is_workday => {
                calendar::shift(date, 2).map(|end| (date, end, Weekday::Sat))
            }
            _ => None,
        };

        // Shapes running off either end of the calendar are skipped.
        let Some((start, end, leave_day)) = bridge else {
            continue;
        };

        let leave_date = match leave_day {
            Weekday::Mon => date.pred_opt(),
            _ => date.succ_opt(),
        };
        if leave_date.map_or(true, |leave_date| off_days.is_off_day(leave_date)) {
            continue;
        }

        spans.push(LongWeekendOpportunity::potential(
            start,
            end,
            off_days.names_between(start, end),
            leave_day,
        ));
    }

    spans
}

/// Counts per category, used for log lines and summaries.
pub fn category_counts(opportunities: &[LongWeekendOpportunity]) -> (usize, usize) {
    opportunities
        .iter()
        .fold((0, 0), |(confirmed, potential), opportunity| {
            match opportunity.category {
                OpportunityCategory::Confirmed => (confirmed + 1, potential),
                OpportunityCategory::Potential => (confirmed, potential + 1),
            }
        })
}
