use serde::Serialize;

use crate::models::catalog_models::Catalog;
use crate::utils::catalog_filter::{filter_certifications, FilterState};
use crate::utils::expansion::ExpansionState;
use crate::utils::logos::{certification_logo, course_logo, CertificationLogo};

#[derive(Debug, Clone, Serialize)]
pub struct CourseRow {
    pub name: String,
    pub nse_level: String,
    pub description: String,
    pub logo: CertificationLogo,
    pub open: bool,
    pub details_available: bool, // the details page does not exist yet, the button stays disabled
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificationRow {
    pub index: usize,
    pub name: String,
    pub nse_levels: Vec<String>,
    pub logo: CertificationLogo,
    pub course_count: usize,
    pub course_count_label: String,
    pub open: bool,
    pub courses: Vec<CourseRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedCatalog {
    pub summary: String,
    pub total: usize,
    pub selected_levels: Vec<String>,
    pub selected_level_count: usize,
    pub certifications: Vec<CertificationRow>,
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// One catalog page: the read-only catalog plus the filter and accordion state it owns.
pub struct CatalogView<'a> {
    catalog: &'a Catalog,
    pub filter: FilterState,
    pub expansion: ExpansionState,
}

impl<'a> CatalogView<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            filter: FilterState::new(),
            expansion: ExpansionState::new(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
    }

    pub fn toggle_level(&mut self, level: &str) {
        self.filter.toggle_level(level);
    }

    pub fn clear_levels(&mut self) {
        self.filter.clear_levels();
    }

    pub fn toggle_certification(&mut self, index: usize) {
        self.expansion.toggle_certification(index);
    }

    pub fn toggle_course(&mut self, certification: usize, course: &str) {
        self.expansion.toggle_course(certification, course);
    }

    pub fn summary(&self, found: usize) -> String {
        let mut summary = format!("{} found", plural(found, "certification"));
        if !self.filter.query.is_empty() {
            summary.push_str(&format!(" for \"{}\"", self.filter.query));
        }
        summary
    }

    pub fn render(&self) -> RenderedCatalog {
        let filtered = filter_certifications(self.catalog, &self.filter);
        let certifications: Vec<CertificationRow> = filtered
            .iter()
            .enumerate()
            .map(|(index, cert)| CertificationRow {
                index,
                name: cert.name.clone(),
                nse_levels: cert.nse_levels.clone(),
                logo: certification_logo(cert),
                course_count: cert.courses.len(),
                course_count_label: format!("{} available", plural(cert.courses.len(), "course")),
                open: self.expansion.is_certification_open(index),
                courses: cert
                    .courses
                    .iter()
                    .map(|course| CourseRow {
                        name: course.name.clone(),
                        nse_level: course.nse_level.clone(),
                        description: course.description.clone(),
                        logo: course_logo(&course.nse_level),
                        open: self.expansion.is_course_open(index, &course.name),
                        details_available: false,
                    })
                    .collect(),
            })
            .collect();

        RenderedCatalog {
            summary: self.summary(certifications.len()),
            total: certifications.len(),
            selected_levels: self.filter.selected_levels().to_vec(),
            selected_level_count: self.filter.selected_levels().len(),
            certifications,
        }
    }
}
