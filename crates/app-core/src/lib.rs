//! Core application logic for Astro Connect
//!
//! This crate contains domain data shared by the screens, starting with
//! the zodiac sign catalogue.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod zodiac;

pub use zodiac::{Element, ZodiacError, ZodiacSign};
