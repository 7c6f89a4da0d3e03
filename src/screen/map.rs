use serde::{Deserialize, Serialize};

use super::location::{LocationState, Position};

pub const REGION_DELTA: f64 = 0.01;

pub const LOADING_TEXT: &str = "Loading map...";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Position,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub fn around(center: Position) -> Self {
        Self {
            center,
            latitude_delta: REGION_DELTA,
            longitude_delta: REGION_DELTA,
        }
    }
}

/// What the map surface should show.
#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Loading,
    Ready { region: Region, marker: Position },
}

impl MapView {
    pub fn from_location(location: &LocationState) -> Self {
        match location.position() {
            Some(position) => MapView::Ready {
                region: Region::around(position),
                marker: position,
            },
            None => MapView::Loading,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            MapView::Loading => Some(LOADING_TEXT),
            MapView::Ready { .. } => None,
        }
    }
}
