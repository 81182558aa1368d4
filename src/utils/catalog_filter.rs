use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::catalog_models::{Catalog, Certification, Course};

/// Search text and selected level labels owned by one catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    selected_levels: Vec<String>, // no duplicates, kept in the order they were picked
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            selected_levels: Vec::new(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn selected_levels(&self) -> &[String] {
        &self.selected_levels
    }

    pub fn is_selected(&self, level: &str) -> bool {
        self.selected_levels.iter().any(|l| l == level)
    }

    pub fn add_level(&mut self, level: &str) {
        if !self.is_selected(level) {
            self.selected_levels.push(level.to_string());
        }
    }

    pub fn remove_level(&mut self, level: &str) {
        self.selected_levels.retain(|l| l != level);
    }

    pub fn toggle_level(&mut self, level: &str) {
        if self.is_selected(level) {
            self.remove_level(level);
        } else {
            self.add_level(level);
        }
    }

    pub fn clear_levels(&mut self) {
        self.selected_levels.clear();
    }

    pub fn matches_query(&self, certification: &Certification, course: &Course) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        course.name.to_lowercase().contains(&needle)
            || course.description.to_lowercase().contains(&needle)
            || certification.name.to_lowercase().contains(&needle)
    }

    pub fn matches_level(&self, course: &Course) -> bool {
        self.selected_levels.is_empty() || self.is_selected(&course.nse_level)
    }

    pub fn matches(&self, certification: &Certification, course: &Course) -> bool {
        self.matches_query(certification, course) && self.matches_level(course)
    }
}

/// Keeps every course passing both predicates and drops certifications left without courses.
/// Source order is preserved for certifications and for courses inside each one.
pub fn filter_certifications(catalog: &Catalog, filter: &FilterState) -> Vec<Certification> {
    let filtered: Vec<Certification> = catalog
        .certifications
        .iter()
        .filter_map(|cert| {
            let courses: Vec<Course> = cert
                .courses
                .iter()
                .filter(|course| filter.matches(cert, course))
                .cloned()
                .collect();
            if courses.is_empty() {
                None
            } else {
                Some(Certification {
                    name: cert.name.clone(),
                    nse_levels: cert.nse_levels.clone(),
                    courses,
                })
            }
        })
        .collect();

    tracing::debug!(
        query = %filter.query,
        levels = ?filter.selected_levels,
        "Filtered catalog down to {} certifications",
        filtered.len()
    );
    filtered
}

/// Integer embedded in a level label once its non-numeric prefix is stripped ("NSE 10" -> 10).
pub fn level_number(label: &str) -> Option<u32> {
    let digits: String = label
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

fn compare_levels(a: &str, b: &str) -> Ordering {
    match (level_number(a), level_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Every distinct course level in the catalog, ordered by embedded number rather than lexicographically.
pub fn sorted_levels(catalog: &Catalog) -> Vec<String> {
    let distinct: BTreeSet<&str> = catalog
        .certifications
        .iter()
        .flat_map(|cert| cert.courses.iter().map(|course| course.nse_level.as_str()))
        .collect();
    let mut levels: Vec<String> = distinct.into_iter().map(str::to_string).collect();
    levels.sort_by(|a, b| compare_levels(a, b));
    levels
}
