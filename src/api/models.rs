//! API response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status literal carried by every successful envelope
pub const STATUS_SUCCESS: &str = "success";

/// Message returned from the root route
pub const WELCOME_MESSAGE: &str = "Welcome to Flask API";

/// Root route response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct WelcomeResponse {
    /// Fixed welcome text
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

/// A sample item
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct Item {
    /// 1-based position in the catalog
    pub id: u32,
    pub name: String,
    pub description: String,
}

impl Item {
    fn new(id: u32, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// The fixed item list, in catalog order
    pub fn catalog() -> Vec<Item> {
        vec![
            Item::new(1, "Item 1", "First item"),
            Item::new(2, "Item 2", "Second item"),
            Item::new(3, "Item 3", "Third item"),
        ]
    }
}

/// Item list envelope
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct DataResponse {
    /// Always "success"
    pub status: String,
    pub data: Vec<Item>,
}

impl DataResponse {
    pub fn success(data: Vec<Item>) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            data,
        }
    }
}

/// Greeting envelope
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    /// Always "success"
    pub status: String,
    /// "Hello, {name}!"
    pub message: String,
}

impl MessageResponse {
    /// Build the greeting for `name`. The name is interpolated as-is.
    pub fn greeting(name: &str) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: format!("Hello, {}!", name),
        }
    }
}
