//! Section components
//!
//! Declarative page-level building blocks: props in, markup out. Each
//! section that ships multiple layouts takes a variant enum and dispatches
//! to a per-variant render function.

pub mod cta;
pub mod faq;
pub mod features;
pub mod footer;
pub mod header;
pub mod hero;
pub mod pricing;
pub mod testimonials;

pub use cta::{CtaSection, CtaVariant};
pub use faq::{FaqEntry, FaqSection, FaqVariant};
pub use features::{FeatureGrid, FeatureItem};
pub use footer::SiteFooter;
pub use header::SiteHeader;
pub use hero::{HeroContent, HeroSection, HeroStat, HeroVariant};
pub use pricing::{BillingPeriod, PricingPlan, PricingSection};
pub use testimonials::{Testimonial, TestimonialRow};

/// Link-style call to action shared by section components
#[derive(Clone, PartialEq)]
pub struct CtaLink {
    pub label: String,
    pub href: String,
}

impl CtaLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}
