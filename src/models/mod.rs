pub mod client;
pub mod order;
pub mod project;

pub use client::{Client, ClientContact};
pub use order::Order;
pub use project::{Project, ProjectFields};
