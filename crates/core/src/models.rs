use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outing type a place is curated for. Closed set; the wire codes are the
/// Spanish values the catalog feed uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Trabajo,
    Familia,
    Pareja,
}

impl PlaceCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "trabajo" | "work" => Some(Self::Trabajo),
            "familia" | "family" => Some(Self::Familia),
            "pareja" | "couple" => Some(Self::Pareja),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Trabajo => "trabajo",
            Self::Familia => "familia",
            Self::Pareja => "pareja",
        }
    }

    /// Display label for badges and chips.
    pub fn label(self) -> &'static str {
        match self {
            Self::Trabajo => "Trabajo",
            Self::Familia => "Familia",
            Self::Pareja => "Pareja",
        }
    }

    /// Accent color token the shell maps to its theme.
    pub fn color_token(self) -> &'static str {
        match self {
            Self::Trabajo => "blue",
            Self::Familia => "green",
            Self::Pareja => "pink",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One venue record. Catalogs are read-only after load; `id` is unique
/// within a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: u32,
    pub name: String,
    pub category: PlaceCategory,
    pub rating: f32,
    /// Formatted proximity label (e.g. "0.5 km"). Display only.
    pub distance: String,
    /// Price tier label (e.g. "$$", "Gratis").
    pub price: String,
    pub description: String,
    /// Display order preserved; matching treats this as a set.
    pub amenities: Vec<String>,
    pub location: GeoPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Budget {
    Bajo,
    Medio,
    Alto,
}

impl Budget {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "bajo" | "low" => Some(Self::Bajo),
            "medio" | "medium" => Some(Self::Medio),
            "alto" | "high" => Some(Self::Alto),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Bajo => "bajo",
            Self::Medio => "medio",
            Self::Alto => "alto",
        }
    }
}

/// Walking-distance band offered by the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceBand {
    #[serde(rename = "500m")]
    M500,
    #[serde(rename = "1km")]
    Km1,
    #[serde(rename = "2km")]
    Km2,
    #[serde(rename = "5km")]
    Km5Plus,
}

impl DistanceBand {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "500m" => Some(Self::M500),
            "1km" => Some(Self::Km1),
            "2km" => Some(Self::Km2),
            "5km" | "5km+" => Some(Self::Km5Plus),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::M500 => "500m",
            Self::Km1 => "1km",
            Self::Km2 => "2km",
            Self::Km5Plus => "5km",
        }
    }
}

/// The user's structured search selection. Created empty per search
/// session and mutated only through the transitions in `filters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: Option<PlaceCategory>,
    pub budget: Option<Budget>,
    pub distance: Option<DistanceBand>,
    pub amenities: BTreeSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Bot,
}

/// One turn in a conversation. Owned by the session; appended, never
/// mutated or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonic within the session; assigned at append time.
    pub id: u64,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Rejected filter input, caught at the parse boundary before it can reach
/// the matcher.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FilterError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown budget tier: {0}")]
    UnknownBudget(String),
    #[error("unknown distance band: {0}")]
    UnknownDistance(String),
}
