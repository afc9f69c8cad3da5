//! Request and response shapes, and the mapping between them and stored rows.

pub mod codec;
pub mod envelope;

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Client, Order, Project, ProjectFields};

use codec::{decode_list, encode_list};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Trimmed and lower-cased, so the client natural key ignores case.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_contact(client_name: &str, email: &str) -> Result<(), AppError> {
    if client_name.trim().is_empty() {
        return Err(AppError::Validation("clientName is required".to_string()));
    }
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }
    if !EMAIL_RE.is_match(&email) {
        return Err(AppError::Validation(format!("Invalid email address: {email}")));
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRequest {
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub services: Vec<String>,
    pub project_title: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    pub reference_files: String,
    pub additional_notes: String,
    pub status: Option<String>,
}

impl ProjectRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_contact(&self.client_name, &self.email)
    }

    pub fn into_fields(self) -> ProjectFields {
        ProjectFields {
            client_name: self.client_name.trim().to_string(),
            email: normalize_email(&self.email),
            phone: self.phone,
            project_type: self.project_type,
            services: encode_list(&self.services),
            project_title: self.project_title,
            description: self.description,
            budget: self.budget,
            deadline: self.deadline,
            reference_files: self.reference_files,
            additional_notes: self.additional_notes,
            status: self
                .status
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRequest {
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_type: String,
    pub services: Vec<String>,
    pub project_title: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    pub priority: String,
    pub status: Option<String>,
    pub communication_preference: String,
    pub revision_rounds: String,
    pub file_format: Vec<String>,
    pub color_preferences: String,
    pub target_audience: String,
    pub additional_notes: String,
}

impl OrderRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_contact(&self.client_name, &self.email)
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}

impl OrderStatusUpdate {
    pub fn validated_status(&self) -> Result<&str, AppError> {
        let status = self.status.trim();
        if status.is_empty() {
            return Err(AppError::Validation("status is required".to_string()));
        }
        Ok(status)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedId<T: Serialize> {
    pub id: T,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: i64,
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub services: Vec<String>,
    pub project_title: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    pub reference_files: String,
    pub additional_notes: String,
    pub status: Option<String>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        ProjectResponse {
            id: p.id,
            services: decode_list(&p.services),
            client_name: p.client_name,
            email: p.email,
            phone: p.phone,
            project_type: p.project_type,
            project_title: p.project_title,
            description: p.description,
            budget: p.budget,
            deadline: p.deadline,
            reference_files: p.reference_files,
            additional_notes: p.additional_notes,
            status: p.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_type: String,
    pub services: Vec<String>,
    pub project_title: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    pub priority: String,
    pub status: String,
    pub communication_preference: String,
    pub revision_rounds: String,
    pub file_format: Vec<String>,
    pub color_preferences: String,
    pub target_audience: String,
    pub additional_notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        OrderResponse {
            services: decode_list(&o.services),
            file_format: decode_list(&o.file_format),
            id: o.id,
            client_name: o.client_name,
            email: o.email,
            phone: o.phone,
            company: o.company,
            project_type: o.project_type,
            project_title: o.project_title,
            description: o.description,
            budget: o.budget,
            deadline: o.deadline,
            priority: o.priority,
            status: o.status,
            communication_preference: o.communication_preference,
            revision_rounds: o.revision_rounds,
            color_preferences: o.color_preferences,
            target_audience: o.target_audience,
            additional_notes: o.additional_notes,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub total_orders: i32,
    pub total_spent: f64,
    pub last_order_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(c: Client) -> Self {
        ClientResponse {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            company: c.company,
            total_orders: c.total_orders,
            total_spent: c.total_spent,
            last_order_date: c.last_order_date,
            created_at: c.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_validation() {
        assert!(validate_contact("A", "a@x.com").is_ok());
        assert!(validate_contact("A", "  A@X.com ").is_ok());
        assert!(validate_contact("", "a@x.com").is_err());
        assert!(validate_contact("A", "").is_err());
        assert!(validate_contact("A", "not-an-email").is_err());
    }

    #[test]
    fn project_request_normalizes_fields() {
        let req = ProjectRequest {
            client_name: " Ada ".into(),
            email: "Ada@Example.COM".into(),
            services: vec!["logo".into(), "web".into()],
            status: Some("  ".into()),
            ..Default::default()
        };
        let fields = req.into_fields();
        assert_eq!(fields.client_name, "Ada");
        assert_eq!(fields.email, "ada@example.com");
        assert_eq!(fields.services, r#"["logo","web"]"#);
        assert_eq!(fields.status, None);
    }

    #[test]
    fn blank_status_update_is_rejected() {
        let update = OrderStatusUpdate { status: " \t".into() };
        assert!(update.validated_status().is_err());
        let update = OrderStatusUpdate { status: " on-hold ".into() };
        assert_eq!(update.validated_status().unwrap(), "on-hold");
    }
}
