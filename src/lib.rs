//! Lightbox — an in-memory photograph catalog.
//!
//! Records enter through [`Catalog::add_photograph`] / [`Catalog::add_artist`]
//! or in bulk from comma-separated files; every query is a linear scan over
//! the insertion-ordered collections.

pub mod catalog;
pub mod domain;
pub mod error;
pub mod table;

pub use catalog::Catalog;
pub use domain::{Artist, Photograph};
pub use error::{Error, Result};
