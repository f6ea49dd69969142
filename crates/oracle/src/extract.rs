//! Field extraction from a feed response.

use serde_json::Value;

use crate::error::{OracleError, Result};

/// Name of the field the oracle reports.
pub const STEPS_FIELD: &str = "steps";

/// Reads the `steps` field of a health record.
pub fn extract_steps(body: &Value) -> Result<u64> {
    extract_uint(body, STEPS_FIELD)
}

/// Reads `field` from a JSON object as an unsigned integer.
///
/// Integral floats such as `4577.0` are accepted; fractional, negative,
/// string, boolean and null values are rejected. A non-object body is
/// reported as a missing field.
fn extract_uint(body: &Value, field: &'static str) -> Result<u64> {
    let value = body.get(field).ok_or(OracleError::MissingField(field))?;

    if let Some(n) = value.as_u64() {
        return Ok(n);
    }

    match value.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(f as u64),
        _ => Err(OracleError::InvalidField {
            field,
            value: value.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_record() -> Value {
        json!({
            "userId": "user9143",
            "name": "Alex Smith",
            "age": 44,
            "height": "182 cm",
            "weight": "72 kg",
            "bloodPressure": "136/89",
            "heartRate": 63,
            "steps": 4577,
            "sleep": "6 hours",
            "calories": "1913 kcal",
            "conditions": ["hypertension", "diabetes"],
            "medications": ["medication1", "medication2"],
            "lastCheckupDate": "2023-06-15"
        })
    }

    #[test]
    fn reads_steps_from_full_record() {
        assert_eq!(extract_steps(&sample_record()).unwrap(), 4577);
    }

    #[test]
    fn accepts_integral_float() {
        assert_eq!(extract_steps(&json!({ "steps": 4577.0 })).unwrap(), 4577);
    }

    #[test]
    fn missing_field_fails() {
        let mut record = sample_record();
        record.as_object_mut().unwrap().remove("steps");
        assert!(matches!(
            extract_steps(&record),
            Err(OracleError::MissingField("steps"))
        ));
    }

    #[test]
    fn non_object_body_is_missing_field() {
        for body in [json!([4577]), json!(4577), json!("steps"), Value::Null] {
            assert!(matches!(
                extract_steps(&body),
                Err(OracleError::MissingField(_))
            ));
        }
    }

    #[test]
    fn malformed_values_fail() {
        for bad in [
            json!("4577"),
            json!(4577.5),
            json!(-1),
            json!(-1.0),
            json!(null),
            json!(true),
            json!({ "value": 4577 }),
        ] {
            let err = extract_steps(&json!({ "steps": bad.clone() })).unwrap_err();
            match err {
                OracleError::InvalidField { field, value } => {
                    assert_eq!(field, "steps");
                    assert_eq!(value, bad);
                }
                other => panic!("unexpected error for {bad}: {other}"),
            }
        }
    }

    #[test]
    fn extract_uint_reads_other_fields() {
        assert_eq!(extract_uint(&sample_record(), "heartRate").unwrap(), 63);
        assert!(matches!(
            extract_uint(&sample_record(), "height"),
            Err(OracleError::InvalidField { .. })
        ));
    }
}
