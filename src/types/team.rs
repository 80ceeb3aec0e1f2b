use std::fmt;

use serde::{Deserialize, Serialize};

use super::Rating;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<FoundedYear>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_avg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u32>,
}

impl Team {
    pub fn rating(&self) -> Rating {
        Rating::new(self.rating_avg, self.rating_count)
    }

    /// Logo reference, ignoring blank strings.
    pub fn logo(&self) -> Option<&str> {
        self.logo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Up to two uppercase initials taken from the name, `?` when there are none.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

/// The API sends the founding year either as a number or as free text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FoundedYear {
    Year(i64),
    Text(String),
}

impl fmt::Display for FoundedYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoundedYear::Year(year) => write!(f, "{year}"),
            FoundedYear::Text(text) => write!(f, "{}", text.trim()),
        }
    }
}
