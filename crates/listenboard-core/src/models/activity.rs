//! Temporal payloads: daily trend, weekday/hour distribution, sessions
//!
//! Returned by `GET /analytics/daily-trend`, `GET /analytics/time-distribution`
//! and `GET /analytics/sessions`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Plays on one calendar day
///
/// The trend sequence is chronologically ordered. Days with no plays are
/// absent, not zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub plays: u64,
}

/// Play count for one (weekday, hour) cell
///
/// `weekday` follows the backend convention: 0 = Monday through 6 = Sunday.
/// The sequence is sparse; cells with zero plays need not appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDistributionPoint {
    pub weekday: u8,
    pub hour: u8,
    pub count: u64,
}

/// One listening session
///
/// The sessions sequence arrives sorted descending by duration, so the first
/// record is the longest session. That ordering is an upstream contract and
/// is not re-validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: f64,
    pub plays: u64,
}

/// Wire envelope for the daily-trend endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TrendResponse {
    #[serde(default)]
    pub points: Vec<TrendPoint>,
}

/// Wire envelope for the time-distribution endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TimeDistributionResponse {
    #[serde(default)]
    pub points: Vec<TimeDistributionPoint>,
}

/// Wire envelope for the sessions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SessionsResponse {
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
}
