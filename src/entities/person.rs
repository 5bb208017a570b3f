// 🧑 Person - Validated birth year + derived attributes
//
// Stored: first_name, last_name, birth_year, base_salary, bonus
// Derived on every read: age, full_name, salary
//
// birth_year only changes through its validated setter, and the valid
// range tracks the real-world clock: it is re-read on every check.

use crate::clock;
use crate::config::PersonConfig;
use crate::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Birth years must always be strictly greater than this
pub const BIRTH_YEAR_FLOOR: i32 = 1900;

// ============================================================================
// PERSON ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    pub first_name: String,
    pub last_name: String,

    /// Always within `(min_birth_year_exclusive, current_year]`, and never at or below 1900
    birth_year: i32,

    /// Salary before bonus
    pub base_salary: f64,

    /// Bonus in percent of base salary
    pub bonus: f64,

    #[serde(skip)]
    min_birth_year_exclusive: i32,
}

impl Person {
    /// Create a person with the standard salary (50000 + 10% bonus)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_year: i32,
    ) -> Result<Self> {
        Self::with_config(first_name, last_name, birth_year, &PersonConfig::default())
    }

    /// Create a person with salary taken from config.
    ///
    /// The configured lower birth-year bound can only tighten `BIRTH_YEAR_FLOOR`.
    pub fn with_config(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_year: i32,
        config: &PersonConfig,
    ) -> Result<Self> {
        let min_birth_year_exclusive = config.min_birth_year_exclusive.max(BIRTH_YEAR_FLOOR);
        let birth_year =
            check_birth_year(birth_year, min_birth_year_exclusive, clock::current_year())?;

        Ok(Person {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_year,
            base_salary: config.base_salary,
            bonus: config.bonus_percent,
            min_birth_year_exclusive,
        })
    }

    /// Create a person from an untyped birth year (e.g. parsed JSON).
    ///
    /// Fails with `TypeMismatch` unless the value is an integer.
    pub fn from_value(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_year: &Value,
    ) -> Result<Self> {
        Self::new(first_name, last_name, integer_year(birth_year)?)
    }

    // ========================================================================
    // BIRTH YEAR
    // ========================================================================

    pub fn birth_year(&self) -> i32 {
        self.birth_year
    }

    /// Validated setter; the current year is read from the clock
    pub fn set_birth_year(&mut self, year: i32) -> Result<()> {
        self.birth_year =
            check_birth_year(year, self.min_birth_year_exclusive, clock::current_year())?;
        tracing::debug!(year, "birth year updated");
        Ok(())
    }

    /// Type-checked setter for untyped input
    pub fn set_birth_year_value(&mut self, year: &Value) -> Result<()> {
        let year = integer_year(year)?;
        self.set_birth_year(year)
    }

    // ========================================================================
    // DERIVED ATTRIBUTES
    // ========================================================================

    /// Age in whole years, based on the clock at call time
    pub fn age(&self) -> i32 {
        self.age_in(clock::current_year())
    }

    fn age_in(&self, current_year: i32) -> i32 {
        current_year.saturating_sub(self.birth_year)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Split "First Last" on its single space.
    ///
    /// Anything other than two non-empty parts is rejected and the
    /// person is left unchanged.
    pub fn set_full_name(&mut self, value: &str) -> Result<()> {
        let mut parts = value.split(' ');

        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(last), None) if !first.is_empty() && !last.is_empty() => {
                self.first_name = first.to_string();
                self.last_name = last.to_string();
                Ok(())
            }
            _ => Err(ModelError::MalformedName(value.to_string())),
        }
    }

    /// Base salary plus bonus percentage
    pub fn salary(&self) -> f64 {
        self.base_salary + (self.base_salary * self.bonus / 100.0)
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

fn check_birth_year(year: i32, min_exclusive: i32, current_year: i32) -> Result<i32> {
    if year <= min_exclusive || year > current_year {
        return Err(ModelError::out_of_range(
            "birth_year",
            format!("Birth year must be between {} and {}.", min_exclusive, current_year),
        ));
    }
    Ok(year)
}

fn integer_year(value: &Value) -> Result<i32> {
    let mismatch = || ModelError::TypeMismatch {
        field: "birth_year".to_string(),
        expected: "an integer",
        found: value.to_string(),
    };

    let number = match value {
        Value::Number(n) => n,
        _ => return Err(mismatch()),
    };

    if let Some(year) = number.as_i64() {
        i32::try_from(year).map_err(|_| {
            ModelError::out_of_range("birth_year", format!("Birth year {} is out of range.", year))
        })
    } else if number.is_u64() {
        Err(ModelError::out_of_range(
            "birth_year",
            format!("Birth year {} is out of range.", number),
        ))
    } else {
        Err(mismatch())
    }
}

// ============================================================================
// SERDE
// ============================================================================

/// Wire shape; deserialization goes through the same validation as `new`
#[derive(Deserialize)]
struct PersonRecord {
    first_name: String,
    last_name: String,
    birth_year: i32,
    #[serde(default)]
    base_salary: Option<f64>,
    #[serde(default)]
    bonus: Option<f64>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = ModelError;

    fn try_from(record: PersonRecord) -> Result<Self> {
        let mut person = Person::new(record.first_name, record.last_name, record.birth_year)?;
        if let Some(base_salary) = record.base_salary {
            person.base_salary = base_salary;
        }
        if let Some(bonus) = record.bonus {
            person.bonus = bonus;
        }
        Ok(person)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn ada() -> Person {
        Person::new("Ada", "Lovelace", 1990).unwrap()
    }

    #[test]
    fn test_new_person_defaults() {
        let person = ada();
        assert_eq!(person.first_name, "Ada");
        assert_eq!(person.last_name, "Lovelace");
        assert_eq!(person.birth_year(), 1990);
        assert_eq!(person.base_salary, 50_000.0);
        assert_eq!(person.bonus, 10.0);
    }

    #[test]
    fn test_age_tracks_clock() {
        let person = ada();
        assert_eq!(person.age(), clock::current_year() - 1990);
        assert_eq!(person.age_in(2030), 40);
    }

    #[test]
    fn test_birth_year_bounds() {
        let current = clock::current_year();

        assert!(Person::new("A", "B", 1900).is_err());
        assert!(Person::new("A", "B", 1901).is_ok());
        assert!(Person::new("A", "B", current).is_ok());
        assert!(Person::new("A", "B", current + 1).is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        let err = Person::new("A", "B", 1850).unwrap_err();
        let expected = format!("Birth year must be between 1900 and {}.", clock::current_year());
        assert_eq!(err.to_string(), expected);
        assert!(matches!(err, ModelError::OutOfRange { ref field, .. } if field == "birth_year"));
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        let mut person = ada();
        assert!(person.set_birth_year(1800).is_err());
        assert_eq!(person.birth_year(), 1990);

        person.set_birth_year(2000).unwrap();
        assert_eq!(person.birth_year(), 2000);
    }

    #[test]
    fn test_far_future_birth_year_rejected() {
        let mut person = ada();
        assert!(person.set_birth_year(3000).is_err());
        assert!(Person::new("A", "B", 3000).is_err());
        assert_eq!(person.birth_year(), 1990);
        assert!(person.age() >= 0);
    }

    #[test]
    fn test_age_in_saturates() {
        let person = ada();
        assert_eq!(person.age_in(i32::MIN), i32::MIN);
        assert_eq!(person.age_in(i32::MAX), i32::MAX - 1990);
    }

    #[test]
    fn test_untyped_birth_year_must_be_integer() {
        let mut person = ada();

        for bad in [json!(1990.5), json!("1990"), json!(true), json!(null), json!([1990])] {
            let err = person.set_birth_year_value(&bad).unwrap_err();
            assert!(
                matches!(err, ModelError::TypeMismatch { .. }),
                "{} should be a type mismatch, got {:?}",
                bad,
                err
            );
        }
        assert_eq!(person.birth_year(), 1990);

        person.set_birth_year_value(&json!(1985)).unwrap();
        assert_eq!(person.birth_year(), 1985);
    }

    #[test]
    fn test_untyped_integer_out_of_range() {
        let err = Person::from_value("A", "B", &json!(1800)).unwrap_err();
        assert!(matches!(err, ModelError::OutOfRange { .. }));

        let err = Person::from_value("A", "B", &json!(10_000_000_000_i64)).unwrap_err();
        assert!(matches!(err, ModelError::OutOfRange { .. }));

        let err = Person::from_value("A", "B", &json!(u64::MAX)).unwrap_err();
        assert!(matches!(err, ModelError::OutOfRange { .. }));
    }

    #[test]
    fn test_full_name_round_trip() {
        let mut person = ada();
        assert_eq!(person.full_name(), "Ada Lovelace");

        person.set_full_name("Grace Hopper").unwrap();
        assert_eq!(person.first_name, "Grace");
        assert_eq!(person.last_name, "Hopper");
        assert_eq!(person.full_name(), "Grace Hopper");
    }

    #[test]
    fn test_malformed_full_name_is_rejected() {
        let mut person = ada();

        for bad in ["Madonna", "Mary Jane Watson", "Grace  Hopper", " Hopper", "Grace ", ""] {
            let err = person.set_full_name(bad).unwrap_err();
            assert_eq!(err, ModelError::MalformedName(bad.to_string()));
        }
        assert_eq!(person.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_salary() {
        let mut person = ada();
        assert_eq!(person.salary(), 55_000.0);

        person.bonus = 20.0;
        assert_eq!(person.salary(), 60_000.0);
    }

    #[test]
    fn test_with_config() {
        let config = PersonConfig {
            base_salary: 80_000.0,
            bonus_percent: 5.0,
            min_birth_year_exclusive: 1950,
        };

        let person = Person::with_config("Alan", "Turing", 1960, &config).unwrap();
        assert_eq!(person.salary(), 84_000.0);

        assert!(Person::with_config("Alan", "Turing", 1950, &config).is_err());

        let mut person = person;
        assert!(person.set_birth_year(1940).is_err());
    }

    #[test]
    fn test_config_cannot_loosen_floor() {
        let config = PersonConfig {
            min_birth_year_exclusive: 1000,
            ..PersonConfig::default()
        };

        let err = Person::with_config("Old", "Timer", 1200, &config).unwrap_err();
        assert!(matches!(err, ModelError::OutOfRange { .. }));
        assert!(Person::with_config("Old", "Timer", 1900, &config).is_err());

        let mut person = Person::with_config("Old", "Timer", 1901, &config).unwrap();
        assert!(person.set_birth_year(1500).is_err());
        assert_eq!(person.birth_year(), 1901);
    }

    #[test]
    fn test_deserialize_validates() {
        let person: Person = serde_json::from_value(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "birth_year": 1990
        }))
        .unwrap();
        assert_eq!(person.salary(), 55_000.0);

        let result: std::result::Result<Person, _> = serde_json::from_value(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "birth_year": 1815
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut person = ada();
        person.bonus = 15.0;

        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["birth_year"], 1990);
        assert!(json.get("min_birth_year_exclusive").is_none());

        let back: Person = serde_json::from_value(json).unwrap();
        assert_eq!(back, person);
    }

    proptest! {
        #[test]
        fn prop_age_is_year_difference(offset in 0i32..120) {
            let current = clock::current_year();
            let year = (current - offset).max(1901);
            let person = Person::new("A", "B", year).unwrap();
            prop_assert_eq!(person.age_in(current), current - year);
        }

        #[test]
        fn prop_years_up_to_1900_rejected(year in -5000i32..=1900) {
            prop_assert!(Person::new("A", "B", year).is_err());
        }

        #[test]
        fn prop_future_years_rejected(ahead in 1i32..1000) {
            prop_assert!(Person::new("A", "B", clock::current_year() + ahead).is_err());
        }
    }
}
