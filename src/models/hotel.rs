use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::services::crud::Entity;
use crate::services::validation::{require_positive, require_text};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HotelStatus {
    #[default]
    Active,
    Maintenance,
    Inactive,
}

impl HotelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelStatus::Active => "active",
            HotelStatus::Maintenance => "maintenance",
            HotelStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub rooms: u32,
    pub status: HotelStatus,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub rooms: u32,
    #[serde(default)]
    pub status: HotelStatus,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
}

impl HotelDraft {
    /// Coordinates of `0,0` mean the location has not been geocoded yet.
    pub fn needs_coordinates(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}

impl Entity for Hotel {
    type Draft = HotelDraft;

    fn id(&self) -> u64 {
        self.id
    }

    fn validate(draft: &HotelDraft) -> Result<(), ValidationError> {
        require_text("name", &draft.name)?;
        require_text("location", &draft.location)?;
        require_positive("rooms", draft.rooms as u64)
    }

    fn from_draft(id: u64, draft: HotelDraft) -> Self {
        Hotel {
            id,
            name: draft.name,
            location: draft.location,
            rooms: draft.rooms,
            status: draft.status,
            lat: draft.lat,
            lng: draft.lng,
        }
    }

    fn apply_draft(&self, draft: HotelDraft) -> Self {
        Hotel::from_draft(self.id, draft)
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.location.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HotelSortField {
    #[default]
    Name,
    Location,
    Rooms,
    Status,
}

impl HotelSortField {
    /// Unknown field names fall back to sorting by name.
    pub fn parse(s: &str) -> Self {
        match s {
            "location" => HotelSortField::Location,
            "rooms" => HotelSortField::Rooms,
            "status" => HotelSortField::Status,
            _ => HotelSortField::Name,
        }
    }
}

pub fn sort_hotels(hotels: &mut [&Hotel], field: HotelSortField, descending: bool) {
    hotels.sort_by(|a, b| {
        let ord = match field {
            HotelSortField::Name => a.name.cmp(&b.name),
            HotelSortField::Location => a.location.cmp(&b.location),
            HotelSortField::Rooms => a.rooms.cmp(&b.rooms),
            HotelSortField::Status => a.status.as_str().cmp(b.status.as_str()),
        };
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

/// Properties shown when the hotel panel first loads.
pub fn seed_hotels() -> Vec<Hotel> {
    let hotels = [
        ("Serena Hotel", "Nairobi Central Business District", 142, -1.2864, 36.8172),
        ("Sankara Nairobi", "Westlands, Nairobi", 168, -1.2664, 36.8029),
        ("Diani Reef Beach Resort", "Diani Beach, Mombasa", 143, -4.2781, 39.5908),
        ("Lake Naivasha Sopa Resort", "Naivasha, Nakuru County", 84, -0.7577, 36.4168),
    ];

    hotels
        .into_iter()
        .enumerate()
        .map(|(i, (name, location, rooms, lat, lng))| Hotel {
            id: i as u64 + 1,
            name: name.to_string(),
            location: location.to_string(),
            rooms,
            status: HotelStatus::Active,
            lat,
            lng,
        })
        .collect()
}
