//! Common reusable UI components
//!
//! This module provides the building blocks shared by the section
//! components and pages: buttons, badges, modals, form inputs, the FAQ
//! accordion, the screenshot lightbox, and pagination controls.

pub mod accordion;
pub mod badge;
pub mod button;
pub mod form;
pub mod lightbox;
pub mod modal;
pub mod pagination;

pub use accordion::{Accordion, AccordionEntry};
pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonGroup, ButtonSize, ButtonVariant, IconButton, LinkButton};
pub use form::{CheckboxField, SelectField, TextAreaField, TextField};
pub use lightbox::{Lightbox, LightboxImage};
pub use modal::{BaseModal, VideoModal};
pub use pagination::{Pagination, SimplePagination};
