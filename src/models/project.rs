use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    /// Encoded list, see `dto::codec`.
    pub services: String,
    pub project_title: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    pub reference_files: String,
    pub additional_notes: String,
    pub status: Option<String>,
}

/// Every mutable column of a project. Used for both insert and full replace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFields {
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub services: String,
    pub project_title: String,
    pub description: String,
    pub budget: String,
    pub deadline: String,
    pub reference_files: String,
    pub additional_notes: String,
    pub status: Option<String>,
}

impl Project {
    pub fn from_fields(id: i64, fields: &ProjectFields) -> Self {
        Project {
            id,
            client_name: fields.client_name.clone(),
            email: fields.email.clone(),
            phone: fields.phone.clone(),
            project_type: fields.project_type.clone(),
            services: fields.services.clone(),
            project_title: fields.project_title.clone(),
            description: fields.description.clone(),
            budget: fields.budget.clone(),
            deadline: fields.deadline.clone(),
            reference_files: fields.reference_files.clone(),
            additional_notes: fields.additional_notes.clone(),
            status: fields.status.clone(),
        }
    }
}
