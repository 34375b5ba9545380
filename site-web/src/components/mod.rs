//! UI Components

pub mod faq_list;
pub mod footer;
pub mod icons;
pub mod legal_page;
pub mod navbar;

pub use faq_list::FaqList;
pub use footer::Footer;
pub use icons::{Icon, IconKind};
pub use legal_page::LegalPage;
pub use navbar::Navbar;
