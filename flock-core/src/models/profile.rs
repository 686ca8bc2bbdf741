use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// Profilo utente mostrato nella BioCard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub bio: String,
}

/// Campi modificabili del profilo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Bio,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [ProfileField::Name, ProfileField::Email, ProfileField::Bio];

    /// Nome usato nell'attributo `name` dell'input HTML.
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Bio => "bio",
        }
    }
}

impl FromStr for ProfileField {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ProfileField::Name),
            "email" => Ok(ProfileField::Email),
            "bio" => Ok(ProfileField::Bio),
            other => Err(EditorError::UnknownField(other.to_string())),
        }
    }
}

impl UserProfile {
    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Bio => self.bio = value,
        }
    }
}
