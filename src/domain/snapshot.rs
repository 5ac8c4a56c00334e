// Dashboard snapshot domain model (wire shape of GET /api/v1/dashboard)
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

/// The complete dashboard payload for one fetch.
///
/// A snapshot is never patched: a new fetch replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(deserialize_with = "deserialize_count")]
    pub total_calls: u64,
    pub total_calls_change: f64,
    #[serde(deserialize_with = "deserialize_count")]
    pub appointments_booked: u64,
    pub appointments_change: f64,
    pub avg_call_duration: String,
    pub avg_call_duration_change: f64,
    pub avg_rating: f64,
    pub avg_rating_change: f64,
    #[serde(default)]
    pub daily_stats: Vec<DailyStat>,
    #[serde(default)]
    pub recent_calls: Vec<RecentCall>,
}

/// One day of aggregated metrics, in chronological order within the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: String,
    #[serde(deserialize_with = "deserialize_count")]
    pub calls: u32,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub appointments: u32,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub rating: f64,
}

/// Counts sent either as integers or as whole floats (`142` or `142.0`)
#[derive(Deserialize)]
#[serde(untagged)]
enum WireCount {
    Integer(u64),
    Float(f64),
}

fn deserialize_count<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let value = match WireCount::deserialize(deserializer)? {
        WireCount::Integer(value) => value,
        WireCount::Float(value)
            if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 =>
        {
            value as u64
        }
        WireCount::Float(value) => {
            return Err(serde::de::Error::custom(format!(
                "expected a non-negative whole count, got {}",
                value
            )));
        }
    };

    T::try_from(value)
        .map_err(|_| serde::de::Error::custom(format!("count {} is out of range", value)))
}

impl DailyStat {
    /// Short English weekday name for the record's date ("Mon", "Tue", ...).
    ///
    /// Falls back to the raw date string when it cannot be parsed.
    pub fn weekday_label(&self) -> String {
        match parse_weekday(&self.date) {
            Some(day) => weekday_short(day).to_string(),
            None => self.date.clone(),
        }
    }
}

fn parse_weekday(date: &str) -> Option<Weekday> {
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Some(day.weekday());
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(date) {
        return Some(ts.weekday());
    }
    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.weekday())
}

fn weekday_short(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// A single entry of the recent calls table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentCall {
    pub number: String,
    pub call_type: String,
    pub appointment: Appointment,
    #[serde(default)]
    pub rating: Option<f64>,
    pub duration: String,
}

impl RecentCall {
    pub fn is_booked(&self) -> bool {
        self.appointment.is_booked()
    }
}

/// Appointment flag as sent by the API: `"Yes"` / `"No"`, or a plain boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Appointment {
    Flag(bool),
    Text(String),
}

impl Appointment {
    pub fn is_booked(&self) -> bool {
        match self {
            Appointment::Flag(flag) => *flag,
            Appointment::Text(text) => text == "Yes",
        }
    }
}
