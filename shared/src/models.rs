use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// `price` is a display string ("$100"), not a currency amount; nothing in
/// the site does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub price: String,
}
