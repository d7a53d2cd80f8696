//! Order storage for the demonstration order service

pub mod in_memory;

#[cfg(test)]
mod tests;

pub use in_memory::InMemoryOrderRepository;
