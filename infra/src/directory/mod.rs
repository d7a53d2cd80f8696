//! User directory backends

pub mod in_memory;

#[cfg(test)]
mod tests;

pub use in_memory::{InMemoryUserDirectory, SeedUser, SEED_USERS};
