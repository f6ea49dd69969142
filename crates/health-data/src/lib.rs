//! Synthetic health records.
//!
//! This crate provides the `HealthRecord` value type served by the mock
//! health endpoint, along with the random generation rules for each field.
//! Records carry no identity and are never persisted: every call to
//! [`HealthRecord::generate`] draws a fresh, independent record.

pub mod random;
pub mod record;

pub use random::{FIRST_NAMES, LAST_NAMES, random_int, random_name};
pub use record::{
    AGE_RANGE, CALORIES_RANGE, CONDITIONS, DIASTOLIC_RANGE, HEART_RATE_RANGE, HEIGHT_RANGE,
    HealthRecord, LAST_CHECKUP_DATE, MEDICATIONS, SLEEP_RANGE, STEPS_RANGE, SYSTOLIC_RANGE,
    USER_ID_RANGE, WEIGHT_RANGE,
};
