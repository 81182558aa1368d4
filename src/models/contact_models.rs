use serde::{Deserialize, Serialize};

/// Literal sent to the relay when the visitor did not come from a reservation.
pub const COURSE_INTEREST_PLACEHOLDER: &str = "Not specified";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub area_code: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub country: String, // picked from the country list, never typed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_interest: Option<String>, // read-only, only set when arriving from a reservation
    #[serde(default)]
    pub message: String,
}

impl ContactFormData {
    pub fn with_course_interest(course_interest: impl Into<String>) -> Self {
        let course_interest = course_interest.into();
        Self {
            course_interest: (!course_interest.is_empty()).then_some(course_interest),
            ..Default::default()
        }
    }
}

/// The editable fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    AreaCode,
    Phone,
    Company,
    Country,
    Message,
}

impl FormField {
    pub const REQUIRED: [FormField; 8] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::AreaCode,
        FormField::Phone,
        FormField::Company,
        FormField::Country,
        FormField::Message,
    ];

    pub fn value<'a>(&self, data: &'a ContactFormData) -> &'a str {
        match self {
            FormField::FirstName => &data.first_name,
            FormField::LastName => &data.last_name,
            FormField::Email => &data.email,
            FormField::AreaCode => &data.area_code,
            FormField::Phone => &data.phone,
            FormField::Company => &data.company,
            FormField::Country => &data.country,
            FormField::Message => &data.message,
        }
    }

    pub fn value_mut<'a>(&self, data: &'a mut ContactFormData) -> &'a mut String {
        match self {
            FormField::FirstName => &mut data.first_name,
            FormField::LastName => &mut data.last_name,
            FormField::Email => &mut data.email,
            FormField::AreaCode => &mut data.area_code,
            FormField::Phone => &mut data.phone,
            FormField::Company => &mut data.company,
            FormField::Country => &mut data.country,
            FormField::Message => &mut data.message,
        }
    }

    /// Country comes from an enumerated list, so whitespace is not stripped before the emptiness check.
    pub fn is_filled(&self, data: &ContactFormData) -> bool {
        let value = self.value(data);
        match self {
            FormField::Country => !value.is_empty(),
            _ => !value.trim().is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Payload handed to the email relay template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub phone: String,
    pub company: String,
    pub country: String,
    pub course_interest: String,
    pub message: String,
    pub to_email: String,
}

impl TemplateParams {
    pub fn from_form(data: &ContactFormData, to_email: &str) -> Self {
        let course_interest = data
            .course_interest
            .as_deref()
            .filter(|interest| !interest.is_empty())
            .unwrap_or(COURSE_INTEREST_PLACEHOLDER)
            .to_string();

        Self {
            from_name: format!("{} {}", data.first_name, data.last_name),
            from_email: data.email.clone(),
            phone: format!("{} {}", data.area_code, data.phone),
            company: data.company.clone(),
            country: data.country.clone(),
            course_interest,
            message: data.message.clone(),
            to_email: to_email.to_string(),
        }
    }
}
