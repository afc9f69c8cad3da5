use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, PartialEq)]
pub struct Client {
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

/// Contact details carried by an order into client reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientContact {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub company: String,
}

impl Client {
    /// A client seen for the first time, with one recorded order at `at`.
    pub fn first_order(id: String, contact: &ClientContact, at: DateTime<Utc>) -> Self {
        Client {
            id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            company: contact.company.clone(),
            total_orders: 1,
            total_spent: 0.0,
            last_order_date: Some(at),
            created_at: at,
        }
    }

    /// Apply one more order: contact fields are last-write-wins, the order date only moves forward.
    pub fn apply_order(&mut self, contact: &ClientContact, at: DateTime<Utc>) {
        self.name = contact.name.clone();
        self.phone = contact.phone.clone();
        self.company = contact.company.clone();
        self.total_orders += 1;
        self.last_order_date = self.last_order_date.max(Some(at));
    }
}
