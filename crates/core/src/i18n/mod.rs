//! Translation and formatting helpers.
//!
//! Labels are looked up by key; domain records never store display strings.

mod formatting;
mod locale;
mod translations;

pub use formatting::{format_compact_aum, format_money, format_signed_percent};
pub use locale::Locale;
pub use translations::{translate, translate_with, Translator};
