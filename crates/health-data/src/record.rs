//! The synthetic health record and its generation rules.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::random::{random_int, random_name};

/// Numeric part of `userId`.
pub const USER_ID_RANGE: RangeInclusive<u32> = 1000..=9999;
/// Age in years.
pub const AGE_RANGE: RangeInclusive<u32> = 20..=60;
/// Height in centimetres.
pub const HEIGHT_RANGE: RangeInclusive<u32> = 150..=200;
/// Weight in kilograms.
pub const WEIGHT_RANGE: RangeInclusive<u32> = 50..=100;
/// Systolic half of `bloodPressure`.
pub const SYSTOLIC_RANGE: RangeInclusive<u32> = 110..=140;
/// Diastolic half of `bloodPressure`.
pub const DIASTOLIC_RANGE: RangeInclusive<u32> = 70..=90;
/// Beats per minute.
pub const HEART_RATE_RANGE: RangeInclusive<u32> = 60..=100;
/// Daily step count.
pub const STEPS_RANGE: RangeInclusive<u32> = 3000..=15000;
/// Hours of sleep.
pub const SLEEP_RANGE: RangeInclusive<u32> = 5..=9;
/// Daily energy intake in kcal.
pub const CALORIES_RANGE: RangeInclusive<u32> = 1800..=3000;

pub const CONDITIONS: [&str; 2] = ["hypertension", "diabetes"];
pub const MEDICATIONS: [&str; 2] = ["medication1", "medication2"];
pub const LAST_CHECKUP_DATE: &str = "2023-06-15";

/// A synthetic health record, serialized with camelCase field names.
///
/// Unit-bearing fields (`height`, `weight`, `sleep`, `calories`) and
/// `bloodPressure` are strings on the wire, e.g. `"182 cm"` or `"136/89"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub user_id: String,
    pub name: String,
    pub age: u32,
    pub height: String,
    pub weight: String,
    pub blood_pressure: String,
    pub heart_rate: u32,
    pub steps: u32,
    pub sleep: String,
    pub calories: String,
    pub conditions: Vec<String>,
    pub medications: Vec<String>,
    pub last_checkup_date: String,
}

impl HealthRecord {
    /// Draws a new record from `rng`.
    ///
    /// Every randomized field is an independent uniform draw over its
    /// inclusive range, including the two halves of `bloodPressure`.
    /// `conditions`, `medications` and `lastCheckupDate` are constant.
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            user_id: format!("user{}", random_int(rng, USER_ID_RANGE)),
            name: random_name(rng),
            age: random_int(rng, AGE_RANGE),
            height: format!("{} cm", random_int(rng, HEIGHT_RANGE)),
            weight: format!("{} kg", random_int(rng, WEIGHT_RANGE)),
            blood_pressure: format!(
                "{}/{}",
                random_int(rng, SYSTOLIC_RANGE),
                random_int(rng, DIASTOLIC_RANGE)
            ),
            heart_rate: random_int(rng, HEART_RATE_RANGE),
            steps: random_int(rng, STEPS_RANGE),
            sleep: format!("{} hours", random_int(rng, SLEEP_RANGE)),
            calories: format!("{} kcal", random_int(rng, CALORIES_RANGE)),
            conditions: CONDITIONS.iter().map(|c| c.to_string()).collect(),
            medications: MEDICATIONS.iter().map(|m| m.to_string()).collect(),
            last_checkup_date: LAST_CHECKUP_DATE.to_string(),
        }
    }

    /// Draws a new record from the thread-local RNG.
    pub fn random() -> Self {
        Self::generate(&mut rand::thread_rng())
    }
}
