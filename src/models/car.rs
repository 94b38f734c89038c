use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::services::crud::Entity;
use crate::services::validation::{require_plate, require_text};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    #[default]
    Available,
    Rented,
    Maintenance,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    pub id: u64,
    pub number_plate: String,
    pub make: String,
    pub model: String,
    pub year: u16,
    pub color: String,
    pub rental_rate: u64,
    pub status: CarStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarDraft {
    #[serde(default)]
    pub number_plate: String,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub year: u16,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub rental_rate: u64,
    #[serde(default)]
    pub status: CarStatus,
}

impl Entity for Car {
    type Draft = CarDraft;

    fn id(&self) -> u64 {
        self.id
    }

    fn validate(draft: &CarDraft) -> Result<(), ValidationError> {
        require_text("number_plate", &draft.number_plate)?;
        require_plate(&draft.number_plate)
    }

    fn from_draft(id: u64, draft: CarDraft) -> Self {
        Car {
            id,
            number_plate: draft.number_plate,
            make: draft.make,
            model: draft.model,
            year: draft.year,
            color: draft.color,
            rental_rate: draft.rental_rate,
            status: draft.status,
        }
    }

    fn apply_draft(&self, draft: CarDraft) -> Self {
        Car::from_draft(self.id, draft)
    }

    fn matches(&self, needle: &str) -> bool {
        self.number_plate.to_lowercase().contains(needle)
            || self.make.to_lowercase().contains(needle)
            || self.model.to_lowercase().contains(needle)
    }
}

/// Fleet shown when the car panel first loads.
pub fn seed_cars() -> Vec<Car> {
    let fleet = [
        ("KDD 123A", "Toyota", "Corolla", 2022, "White", 7500, CarStatus::Available),
        ("KCE 456B", "Honda", "Civic", 2021, "Silver", 8000, CarStatus::Rented),
        ("KBZ 789C", "Mazda", "CX-5", 2023, "Red", 12000, CarStatus::Maintenance),
        ("KDG 234D", "Nissan", "X-Trail", 2022, "Blue", 15000, CarStatus::Available),
        ("KCA 567E", "Suzuki", "Swift", 2021, "Black", 6000, CarStatus::Available),
    ];

    fleet
        .into_iter()
        .enumerate()
        .map(|(i, (plate, make, model, year, color, rate, status))| Car {
            id: i as u64 + 1,
            number_plate: plate.to_string(),
            make: make.to_string(),
            model: model.to_string(),
            year,
            color: color.to_string(),
            rental_rate: rate,
            status,
        })
        .collect()
}
