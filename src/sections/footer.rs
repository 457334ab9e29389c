//! Footer year

use chrono::{Datelike, Local};
use web_sys::Document;

use crate::page::ids;

/// Four-digit calendar year of the local clock
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn stamp_year(document: &Document, year: i32) -> bool {
    super::set_text(document, ids::YEAR, &format!("{:04}", year)).is_some()
}
