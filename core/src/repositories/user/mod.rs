pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

#[cfg(test)]
pub mod mock;

#[cfg(test)]
mod tests;

pub use r#trait::UserDirectory;

#[cfg(test)]
pub use mock::MockUserDirectory;
