//! Console styling helpers shared by the locator, prober, and analyzer output.

use std::fmt::Display;

use owo_colors::{OwoColorize, Style};
use tabled::{
    Table,
    settings::{Alignment, Modify, Style as TableStyle, object::Rows},
};

/// Bold, for section headings and file names.
pub fn header<T: Display>(v: T) -> String {
    v.style(Style::new().bold()).to_string()
}

/// Cyan, for field labels.
pub fn label<T: Display>(v: T) -> String {
    v.style(Style::new().cyan()).to_string()
}

/// Green, for the values attached to labels.
pub fn value<T: Display>(v: T) -> String {
    v.style(Style::new().green()).to_string()
}

/// Dimmed, for routine diagnostics like failed probe attempts.
pub fn dim<T: Display>(v: T) -> String {
    v.style(Style::new().dimmed()).to_string()
}

/// Rounded-border table with a centered header row.
pub fn rounded_table<T, I>(data: I) -> Table
where
    T: tabled::Tabled,
    I: IntoIterator<Item = T>,
{
    let mut table = Table::new(data);
    table
        .with(TableStyle::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table
}
