use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_STATUS: &str = "pending";

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_type: String,
    pub services: String,
    pub project_title: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    pub priority: String,
    pub status: String,
    pub communication_preference: String,
    pub revision_rounds: String,
    pub file_format: String,
    pub color_preferences: String,
    pub target_audience: String,
    pub additional_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
