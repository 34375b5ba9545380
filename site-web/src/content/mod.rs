//! # Site Content
//!
//! Static copy for every page, one table per kind of content. Pages and
//! components render these tables and hold no copy of their own.

pub mod deletion;
pub mod faq;
pub mod features;
pub mod legal;
pub mod support;

pub use faq::{FaqEntry, FAQ_ENTRIES};
pub use features::{Feature, FEATURES};
