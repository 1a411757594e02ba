//! Distinct-value enumeration for facet selectors.
//!
//! Graduation years sort descending (newest classes first); every other
//! facet keeps first-seen store order.

use itertools::Itertools;

use crate::model::Alumni;

pub fn graduation_years(alumni: &[Alumni]) -> Vec<u16> {
    alumni
        .iter()
        .map(|a| a.graduation_year)
        .unique()
        .sorted_by(|a, b| b.cmp(a))
        .collect_vec()
}

pub fn degrees(alumni: &[Alumni]) -> Vec<&str> {
    alumni.iter().map(|a| a.degree.as_str()).unique().collect_vec()
}

pub fn majors(alumni: &[Alumni]) -> Vec<&str> {
    alumni.iter().map(|a| a.major.as_str()).unique().collect_vec()
}

pub fn locations(alumni: &[Alumni]) -> Vec<&str> {
    alumni.iter().map(|a| a.location.as_str()).unique().collect_vec()
}

/// Distinct mentorship areas offered by listed mentors, first-seen order.
pub fn mentorship_areas(alumni: &[Alumni]) -> Vec<&str> {
    alumni
        .iter()
        .filter(|a| a.accepts_mentees())
        .flat_map(|a| a.mentorship_areas.iter().map(String::as_str))
        .unique()
        .collect_vec()
}
