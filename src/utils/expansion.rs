use serde::Serialize;

/// Identifies a course row: the certification position plus the course name,
/// so equally named courses under different certifications never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CourseKey {
    pub certification: usize,
    pub course: String,
}

impl CourseKey {
    pub fn new(certification: usize, course: impl Into<String>) -> Self {
        Self {
            certification,
            course: course.into(),
        }
    }
}

/// Which accordion rows are open. At most one certification and at most one
/// course, tracked independently of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpansionState {
    open_certification: Option<usize>,
    open_course: Option<CourseKey>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_certification(&self) -> Option<usize> {
        self.open_certification
    }

    pub fn open_course(&self) -> Option<&CourseKey> {
        self.open_course.as_ref()
    }

    pub fn is_certification_open(&self, index: usize) -> bool {
        self.open_certification == Some(index)
    }

    pub fn is_course_open(&self, certification: usize, course: &str) -> bool {
        self.open_course
            .as_ref()
            .is_some_and(|key| key.certification == certification && key.course == course)
    }

    /// Opens the row and closes whichever was open before; the open row itself toggles closed.
    pub fn toggle_certification(&mut self, index: usize) {
        self.open_certification = if self.is_certification_open(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn toggle_course(&mut self, certification: usize, course: &str) {
        self.open_course = if self.is_course_open(certification, course) {
            None
        } else {
            Some(CourseKey::new(certification, course))
        };
    }
}
