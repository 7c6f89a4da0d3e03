use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteField {
    StartPoint,
    Destination,
    Date,
    Time,
    Passengers,
}

impl RouteField {
    pub const ALL: [RouteField; 5] = [
        RouteField::StartPoint,
        RouteField::Destination,
        RouteField::Date,
        RouteField::Time,
        RouteField::Passengers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RouteField::StartPoint => "startPoint",
            RouteField::Destination => "destination",
            RouteField::Date => "date",
            RouteField::Time => "time",
            RouteField::Passengers => "passengers",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            RouteField::StartPoint => "Starting Point",
            RouteField::Destination => "Destination",
            RouteField::Date => "Date",
            RouteField::Time => "Time",
            RouteField::Passengers => "Passengers",
        }
    }
}

impl FromStr for RouteField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| anyhow!("unknown route field {s:?}"))
    }
}

impl fmt::Display for RouteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unsaved trip request as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDraft {
    pub start_point: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    /// `None` when the typed text is not a passenger count.
    pub passengers: Option<u32>,
}

impl Default for RouteDraft {
    fn default() -> Self {
        Self {
            start_point: String::new(),
            destination: String::new(),
            date: String::new(),
            time: String::new(),
            passengers: Some(1),
        }
    }
}

impl RouteDraft {
    pub fn set(&mut self, field: RouteField, text: &str) {
        match field {
            RouteField::StartPoint => self.start_point = text.to_string(),
            RouteField::Destination => self.destination = text.to_string(),
            RouteField::Date => self.date = text.to_string(),
            RouteField::Time => self.time = text.to_string(),
            RouteField::Passengers => self.passengers = coerce_passengers(text),
        }
    }

    /// Text shown in the input for `field`.
    pub fn text(&self, field: RouteField) -> String {
        match field {
            RouteField::StartPoint => self.start_point.clone(),
            RouteField::Destination => self.destination.clone(),
            RouteField::Date => self.date.clone(),
            RouteField::Time => self.time.clone(),
            RouteField::Passengers => self
                .passengers
                .map(|count| count.to_string())
                .unwrap_or_default(),
        }
    }
}

/// No validation: anything that is not a whole non-negative number is
/// silently stored as missing.
pub fn coerce_passengers(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}
