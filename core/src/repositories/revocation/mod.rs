pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
mod tests;

pub use r#trait::RevocationStore;

#[cfg(test)]
pub use mock::MockRevocationStore;
