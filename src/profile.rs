use std::fmt;

use chrono::Datelike;

use crate::error::{ClassbookError, Result};

/// Token that ends hobby entry, matched case-insensitively
pub const STOP_TOKEN: &str = "stop";

/// Life stage derived from an age in years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeStage {
    /// 0 to 12
    Child,
    /// 13 to 19
    Teenager,
    /// 20 and over
    Adult,
    /// Negative age
    Unknown,
}

impl LifeStage {
    pub fn from_age(age: i32) -> Self {
        match age {
            0..=12 => LifeStage::Child,
            13..=19 => LifeStage::Teenager,
            20.. => LifeStage::Adult,
            _ => LifeStage::Unknown,
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeStage::Child => write!(f, "Child"),
            LifeStage::Teenager => write!(f, "Teenager"),
            LifeStage::Adult => write!(f, "Adult"),
            LifeStage::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Parse a birth year typed by the user
///
/// The year must be a whole number whose age against `reference_year`
/// fits in an `i32`.
pub fn parse_birth_year(input: &str, reference_year: i32) -> Result<i32> {
    let trimmed = input.trim();
    let birth_year: i32 = trimmed
        .parse()
        .map_err(|_| ClassbookError::invalid_number(trimmed))?;
    age_between(birth_year, reference_year)?;
    Ok(birth_year)
}

fn age_between(birth_year: i32, reference_year: i32) -> Result<i32> {
    reference_year
        .checked_sub(birth_year)
        .ok_or_else(|| ClassbookError::invalid_number(birth_year.to_string()))
}

/// Check whether a hobby line is the stop token
pub fn is_stop_token(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(STOP_TOKEN)
}

/// Personal profile card
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: i32,
    pub stage: LifeStage,
    pub hobbies: Vec<String>,
}

impl Profile {
    pub fn new(
        name: &str,
        birth_year: i32,
        reference_year: i32,
        hobbies: Vec<String>,
    ) -> Result<Self> {
        let age = age_between(birth_year, reference_year)?;
        Ok(Self {
            name: name.trim().to_string(),
            age,
            stage: LifeStage::from_age(age),
            hobbies,
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PROFILE:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Age: {} years old", self.age)?;
        writeln!(f, "Life stage: {}", self.stage)?;

        if self.hobbies.is_empty() {
            return write!(f, "You didn't mention any hobbies.");
        }

        write!(f, "Favorite Hobbies ({}):", self.hobbies.len())?;
        for hobby in &self.hobbies {
            write!(f, "\n- {}", hobby)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_stage_boundaries() {
        assert_eq!(LifeStage::from_age(0), LifeStage::Child);
        assert_eq!(LifeStage::from_age(12), LifeStage::Child);
        assert_eq!(LifeStage::from_age(13), LifeStage::Teenager);
        assert_eq!(LifeStage::from_age(19), LifeStage::Teenager);
        assert_eq!(LifeStage::from_age(20), LifeStage::Adult);
        assert_eq!(LifeStage::from_age(97), LifeStage::Adult);
        assert_eq!(LifeStage::from_age(-1), LifeStage::Unknown);
    }

    #[test]
    fn test_birth_year_parsing() {
        assert_eq!(parse_birth_year(" 1990 ", 2025).unwrap(), 1990);
        assert!(matches!(
            parse_birth_year("nineteen", 2025),
            Err(ClassbookError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_birth_year_with_unrepresentable_age() {
        assert!(matches!(
            parse_birth_year("-2147483648", 2025),
            Err(ClassbookError::InvalidNumber(_))
        ));
        assert!(matches!(
            Profile::new("Ada", i32::MIN, 2025, Vec::new()),
            Err(ClassbookError::InvalidNumber(_))
        ));

        let profile = Profile::new("Ada", i32::MIN, -1, Vec::new()).unwrap();
        assert_eq!(profile.age, i32::MAX);
    }

    #[test]
    fn test_stop_token() {
        assert!(is_stop_token("stop"));
        assert!(is_stop_token("  STOP "));
        assert!(!is_stop_token("stopwatch"));
    }

    #[test]
    fn test_profile_card() {
        let profile = Profile::new(
            "Ada Lovelace ",
            2000,
            2025,
            vec!["chess".to_string(), "rowing".to_string()],
        )
        .unwrap();
        assert_eq!(profile.age, 25);
        assert_eq!(profile.stage, LifeStage::Adult);
        assert_eq!(
            profile.to_string(),
            "PROFILE:\n\
             Name: Ada Lovelace\n\
             Age: 25 years old\n\
             Life stage: Adult\n\
             Favorite Hobbies (2):\n\
             - chess\n\
             - rowing"
        );
    }

    #[test]
    fn test_profile_without_hobbies() {
        let profile = Profile::new("Kid", 2030, 2025, Vec::new()).unwrap();
        assert_eq!(profile.stage, LifeStage::Unknown);
        assert!(profile.to_string().ends_with("You didn't mention any hobbies."));
    }
}
