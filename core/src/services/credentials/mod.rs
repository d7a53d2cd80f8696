//! Username/password verification against the user directory.

mod verifier;


pub use verifier::CredentialVerifier;
