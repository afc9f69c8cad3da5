use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// UUIDv7 keeps ids time-ordered and unique across concurrent requests.
pub fn new_order_id() -> String {
    format!("ORD-{}", Uuid::now_v7().simple())
}

pub fn new_client_id() -> String {
    format!("CLIENT-{}", Uuid::now_v7().simple())
}

/// Current time at the precision Postgres stores.
pub fn timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
