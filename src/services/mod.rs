//! Operations behind the HTTP handlers. Everything here works against `dyn Store`.

pub mod clients;
pub mod orders;
pub mod projects;
pub mod reconcile;
