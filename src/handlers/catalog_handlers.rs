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
    models::catalog_models::reservation_interest,
    utils::catalog_view::{CatalogView, RenderedCatalog},
};

// Request DTOs
#[derive(Deserialize, Default)]
pub struct CatalogQuery {
    q: Option<String>,
    levels: Option<String>, // comma separated labels, e.g. "NSE 4,NSE 5"
    open_certification: Option<usize>, // position in the filtered result
    open_course: Option<String>, // course name
    open_course_certification: Option<usize>, // position holding open_course, defaults to open_certification
}

#[derive(Deserialize)]
pub struct ReservationQuery {
    certification: String,
    course: String,
}

// Response DTOs
#[derive(Serialize)]
pub struct CatalogResponse {
    available_levels: Vec<String>,
    #[serde(flatten)]
    catalog: RenderedCatalog,
}

#[derive(Serialize)]
pub struct ReservationResponse {
    course_interest: String,
    redirect: &'static str,
}

pub async fn get_catalog(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogResponse> {
    let mut view = CatalogView::new(state.catalog.catalog());

    if let Some(q) = query.q {
        view.set_query(q);
    }
    if let Some(levels) = query.levels {
        for level in levels.split(',').map(str::trim).filter(|l| !l.is_empty()) {
            view.filter.add_level(level);
        }
    }
    if let Some(index) = query.open_certification {
        view.toggle_certification(index);
    }
    let course_certification = query.open_course_certification.or(query.open_certification);
    if let (Some(index), Some(course)) = (course_certification, query.open_course.as_deref()) {
        view.toggle_course(index, course);
    }

    Json(CatalogResponse {
        available_levels: state.catalog.levels().to_vec(),
        catalog: view.render(),
    })
}

pub async fn get_levels(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<String>> {
    Json(state.catalog.levels().to_vec())
}

pub async fn reserve_course(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ReservationQuery>,
) -> Result<Json<ReservationResponse>, (StatusCode, Json<serde_json::Value>)> {
    match state.catalog.catalog().find_course(&query.certification, &query.course) {
        Some((cert, course)) => {
            tracing::info!("Reservation requested for {} - {}", cert.name, course.name);
            Ok(Json(ReservationResponse {
                course_interest: reservation_interest(&cert.name, &course.name),
                redirect: "/contact-us",
            }))
        }
        None => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Course not found in catalog"}))
        )),
    }
}
