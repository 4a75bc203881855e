//! METS validation for digitized-audio preservation packages.
//!
//! Parses each item's METS document into a namespace-aware element tree and
//! walks a fixed sequence of structural and content assertions over it,
//! reporting every violation into the shared finding sink. The profile is
//! fixed: one institutional METS layout for audio recordings.

pub mod dates;
pub mod mets;
pub mod text;
pub mod xml;

pub use dates::parse_flexible_date;
pub use mets::{Comparison, MetsValidator, NAMESPACES, RuleConfigError, validate_project};
pub use text::normalize;
pub use xml::{Document, Element, XmlError};
