//! Ownership rules for the demonstration order service.

mod service;

#[cfg(test)]
mod tests;

pub use service::{OrderService, ADMIN_ROLE};
