//! Recipe records
//!
//! A `Recipe` is always the server's representation: the local collection
//! never holds a draft that the remote store has not echoed back.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by the remote store
///
/// Stores in the wild hand out either numbers or strings, so both are kept
/// verbatim. Two ids are equal when their textual forms match, which lets an
/// id typed on the command line (`2`) address a record the server keyed as
/// `"2"`. Non-integer numbers are kept by their text; a missing or null id
/// reads as the empty text id.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecipeId {
    Number(i64),
    Text(String),
}

impl RecipeId {
    /// Path segment used in `/recipes/{id}`
    pub fn as_path_segment(&self) -> String {
        self.to_string()
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        RecipeId::Text(String::new())
    }
}

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(n) => RecipeId::Number(n),
                None => RecipeId::Text(n.to_string()),
            },
            serde_json::Value::String(s) => RecipeId::Text(s),
            serde_json::Value::Null => RecipeId::default(),
            other => RecipeId::Text(other.to_string()),
        })
    }
}

impl PartialEq for RecipeId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RecipeId::Number(a), RecipeId::Number(b)) => a == b,
            (RecipeId::Text(a), RecipeId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for RecipeId {}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Number(n) => write!(f, "{}", n),
            RecipeId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for RecipeId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(n) => RecipeId::Number(n),
            Err(_) => RecipeId::Text(s.to_string()),
        })
    }
}

impl From<i64> for RecipeId {
    fn from(n: i64) -> Self {
        RecipeId::Number(n)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        RecipeId::Text(s.to_string())
    }
}

/// A recipe record from the remote store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    #[serde(default)]
    pub id: RecipeId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    /// Image URL
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: String,
    /// Preparation time, free text ("20 min", "overnight")
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    /// Source URL
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub review: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    /// `None` when the store sent something other than a sequence
    #[serde(default, deserialize_with = "sequence_or_none", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, deserialize_with = "sequence_or_none", skip_serializing_if = "Option::is_none")]
    pub method: Option<Vec<String>>,
}

impl Recipe {
    /// Create an otherwise empty recipe with the given id
    pub fn new(id: impl Into<RecipeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            time: String::new(),
            rating: 0.0,
            category: String::new(),
            url: String::new(),
            review: String::new(),
            author: String::new(),
            description: String::new(),
            ingredients: Some(Vec::new()),
            method: Some(Vec::new()),
        }
    }

    /// Builder method: set ingredients
    pub fn ingredients<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = Some(items.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method: set method steps
    pub fn method<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.method = Some(steps.into_iter().map(Into::into).collect());
        self
    }

    /// Builder method: set rating
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }
}

/// Largest magnitude still printed through the integer path
const MAX_INTEGRAL_RATING: f64 = 1e15;

/// Render a rating the way a number input shows it: `4`, `4.5`
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 && rating.abs() < MAX_INTEGRAL_RATING {
        format!("{}", rating as i64)
    } else {
        format!("{}", rating)
    }
}

/// Text fields take strings as-is and scalars by their JSON text
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn sequence_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    })
}
