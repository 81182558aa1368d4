use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub nse_level: String, // categorical label like "NSE 4", matched exactly by the level filter
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub nse_levels: Vec<String>, // badge labels, independent of which courses survive filtering
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub certifications: Vec<Certification>,
}

impl Catalog {
    pub fn find_course(&self, certification_name: &str, course_name: &str) -> Option<(&Certification, &Course)> {
        self.certifications
            .iter()
            .filter(|cert| cert.name == certification_name)
            .find_map(|cert| {
                cert.courses
                    .iter()
                    .find(|course| course.name == course_name)
                    .map(|course| (cert, course))
            })
    }
}

/// Course-interest string handed to the contact page when "Reservation" is picked.
pub fn reservation_interest(certification_name: &str, course_name: &str) -> String {
    format!("{} - {}", certification_name, course_name)
}
