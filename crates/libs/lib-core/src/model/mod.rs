//! # Model Layer
//!
//! Persistence for deletion requests and the reference-id issuer that keeps their
//! identifiers unique.

pub mod reference;
pub mod store;

pub use reference::ReferenceIssuer;
