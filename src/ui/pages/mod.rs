//! Routed pages: the portfolio itself and a 404

mod home;
mod not_found;

pub use home::{HomePage, PAGE_DESCRIPTION, PAGE_TITLE};
pub use not_found::NotFoundPage;
