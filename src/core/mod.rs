//! Core logic for the marketing site: pagination windowing, demo-request
//! lead capture, and server configuration.

#[cfg(feature = "ssr")]
pub mod config;
pub mod lead;
pub mod pagination;

pub use lead::{DemoRequest, LeadError, LeadReceipt, submit_demo_request};
pub use pagination::{EllipsisSide, PageMarker, PageWindow, page_window};
