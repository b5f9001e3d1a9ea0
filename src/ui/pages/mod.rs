//! Application pages module
//!
//! - Landing page (the Terramark product page)
//! - Showcase page (the component catalog)
//! - Not found (404)

mod landing;
mod not_found;
mod showcase;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use showcase::ShowcasePage;
