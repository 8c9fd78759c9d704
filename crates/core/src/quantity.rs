use std::fmt;

use serde::{Deserialize, Serialize};

/// Amount of an ingredient in a recipe.
///
/// Recipe files carry either a plain number (`2`, `0.5`) or free text
/// (`"1/2"`, `"a pinch"`). Both are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl Quantity {
    /// Text quantities that are really numbers become `Number`.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Text(text) => match text.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Self::Number(n),
                _ => Self::Text(text),
            },
            number @ Self::Number(_) => number,
        }
    }
}

impl Quantity {
    /// Whether the amount survives a NUMERIC column unchanged.
    ///
    /// SQLite reads text such as `"1e400"` as an out-of-range number and
    /// stores infinity, so that text would not come back verbatim.
    pub fn fits_numeric_column(&self) -> bool {
        match self {
            Self::Number(n) => n.is_finite(),
            Self::Text(text) => {
                let t = text.trim();
                let looks_numeric = t
                    .trim_start_matches(['+', '-'])
                    .starts_with(|c: char| c.is_ascii_digit() || c == '.');
                !(looks_numeric && t.parse::<f64>().is_ok_and(|n| !n.is_finite()))
            },
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display already drops a trailing ".0"
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
