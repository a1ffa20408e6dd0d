//! Common domain type definitions
//!
//! This module contains the enum types shared by the record parser, the
//! identity registry and the reference resolver.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RecordError;

/// Gender of a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
}

impl Gender {
    /// Single-letter code used when rendering a person
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            _ => Err(RecordError::InvalidGender {
                code: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// The role a referenced person plays for a child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentRole {
    /// Biological mother
    Mother,
    /// Biological father
    Father,
}

impl ParentRole {
    /// Roles in the order they are checked for every record
    pub const ALL: [Self; 2] = [Self::Mother, Self::Father];

    /// The gender a parent in this role is expected to have
    #[must_use]
    pub const fn expected_gender(self) -> Gender {
        match self {
            Self::Mother => Gender::Female,
            Self::Father => Gender::Male,
        }
    }
}

impl fmt::Display for ParentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mother => write!(f, "mother"),
            Self::Father => write!(f, "father"),
        }
    }
}
