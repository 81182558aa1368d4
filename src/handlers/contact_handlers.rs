use std::sync::Arc;
use axum::{
    extract::{State, Query},
    Json,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    AppState,
    models::contact_models::{ContactFormData, SubmissionState},
    utils::{
        contact_flow::{ContactFlow, FAILURE_MESSAGE},
        countries::{is_known_country, COUNTRIES},
    },
};

#[derive(Deserialize)]
pub struct ContactFormQuery {
    course: Option<String>, // course interest carried over from a catalog reservation
}

#[derive(Serialize)]
pub struct ContactFormResponse {
    form: ContactFormData,
    course_interest_read_only: bool,
    countries: &'static [&'static str],
}

pub async fn get_contact_form(
    Query(query): Query<ContactFormQuery>,
) -> Json<ContactFormResponse> {
    let form = match query.course {
        Some(course) => ContactFormData::with_course_interest(course),
        None => ContactFormData::default(),
    };
    Json(ContactFormResponse {
        course_interest_read_only: form.course_interest.is_some(),
        form,
        countries: COUNTRIES.as_slice(),
    })
}

pub async fn get_countries() -> Json<&'static [&'static str]> {
    Json(COUNTRIES.as_slice())
}

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(form): Json<ContactFormData>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let mut flow = ContactFlow::with_data(form, state.config.relay.to_email.clone())
        .relay_timeout(state.config.relay_timeout);

    if !flow.is_valid() {
        tracing::warn!(missing = ?flow.missing_fields(), "Rejected incomplete contact form");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Please fill in all required fields"}))
        ));
    }

    if !is_known_country(&flow.data().country) {
        tracing::warn!("Contact form sent with unlisted country: {}", flow.data().country);
    }

    let limiter_key = flow.data().email.trim().to_lowercase();
    if !state.contact_limiter.try_reserve(&limiter_key) {
        state.contact_limiter.prune();
        tracing::warn!("Rate limit exceeded for contact form: [redacted email]");
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({"error": "Too many messages, please try again later."}))
        ));
    }

    let outcome = flow.submit(state.relay.as_ref()).await;
    // Only delivered messages count against the sender.
    if outcome != SubmissionState::Succeeded {
        state.contact_limiter.release(&limiter_key);
    }
    state.contact_limiter.prune();

    match outcome {
        SubmissionState::Succeeded => Ok(Json(json!({
            "status": "success",
            "message": flow.status_message(),
        }))),
        _ => Err((
            StatusCode::BAD_GATEWAY,
            Json(json!({"status": "error", "error": FAILURE_MESSAGE}))
        )),
    }
}
