//! Contribution calendar payload and its mapping onto a cell grid.

use crate::constants::{CELL_SIZE, DAY_GAP, WEEK_GAP};
use crate::entity::{Entity, GridLayout};
use crate::error::FieldError;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub contribution_count: u32,
    pub date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u32,
    pub weeks: Vec<Week>,
}

impl ContributionCalendar {
    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|w| w.contribution_days.len()).sum()
    }
}

// The endpoint may forward the GraphQL envelope untouched.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    data: EnvelopeData,
}

#[derive(Deserialize)]
struct EnvelopeData {
    user: EnvelopeUser,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeUser {
    contributions_collection: EnvelopeCollection,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeCollection {
    contribution_calendar: ContributionCalendar,
}

#[derive(Deserialize)]
struct RemoteError {
    error: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Response {
    Failure(RemoteError),
    Calendar(ContributionCalendar),
    Envelope(Envelope),
}

/// Decodes a response body from the contributions endpoint.
pub fn parse_response(body: &str) -> Result<ContributionCalendar, FieldError> {
    // Parse to a value first so a shape mismatch still reports serde's
    // message rather than the generic untagged-enum one.
    let value: serde_json::Value = serde_json::from_str(body)?;
    match serde_json::from_value::<Response>(value.clone()) {
        Ok(Response::Failure(e)) => Err(FieldError::Remote(e.error)),
        Ok(Response::Calendar(calendar)) => Ok(calendar),
        Ok(Response::Envelope(envelope)) => {
            Ok(envelope.data.user.contributions_collection.contribution_calendar)
        }
        Err(_) => Err(serde_json::from_value::<ContributionCalendar>(value)
            .err()
            .map_or(FieldError::Layout("unrecognised payload"), FieldError::from)),
    }
}

/// Identifies a cell by week column and weekday row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub week: usize,
    pub day: usize,
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.week, self.day)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellVisual {
    pub key: CellKey,
    pub count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalendarLayout {
    pub cell_size: f32,
    pub week_gap: f32,
    pub day_gap: f32,
}

impl Default for CalendarLayout {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            week_gap: WEEK_GAP,
            day_gap: DAY_GAP,
        }
    }
}

impl CalendarLayout {
    pub fn grid(&self) -> GridLayout {
        GridLayout::centered(self.cell_size, Vec2::new(self.week_gap, self.day_gap))
    }

    /// Pixel extent of a `weeks` x `days` grid.
    pub fn extent(&self, weeks: usize, days: usize) -> Vec2 {
        let span = |n: usize, gap: f32| {
            if n == 0 {
                0.0
            } else {
                n as f32 * self.cell_size + (n - 1) as f32 * gap
            }
        };
        Vec2::new(span(weeks, self.week_gap), span(days, self.day_gap))
    }
}

/// One entity per calendar day, week-major.
pub fn build_cells(
    calendar: &ContributionCalendar,
    layout: &CalendarLayout,
) -> Vec<Entity<CellVisual>> {
    let grid = layout.grid();
    let mut cells = Vec::with_capacity(calendar.day_count());
    for (week, w) in calendar.weeks.iter().enumerate() {
        for (day, d) in w.contribution_days.iter().enumerate() {
            let key = CellKey { week, day };
            cells.push(Entity::new(
                grid.rest_position(week, day),
                CellVisual {
                    key,
                    count: d.contribution_count,
                },
            ));
        }
    }
    cells
}
