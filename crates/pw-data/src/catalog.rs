//! Race selection catalog
//!
//! Circuits and seasons the backend knows how to load, as presented in
//! the header selector.

pub const CIRCUITS: &[&str] = &[
    "Bahrain",
    "Saudi Arabia",
    "Australia",
    "Japan",
    "China",
    "Miami",
    "Emilia Romagna",
    "Monaco",
    "Canada",
    "Spain",
    "Austria",
    "Great Britain",
    "Hungary",
    "Belgium",
    "Netherlands",
    "Italy",
    "Azerbaijan",
    "Singapore",
    "United States",
    "Mexico",
    "Brazil",
    "Las Vegas",
    "Qatar",
    "Abu Dhabi",
];

/// Seasons available for replay, newest first.
pub const YEARS: &[u16] = &[2024, 2023, 2022, 2021, 2020, 2019];
