use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{QualityClassifier, RecommendError, Recommender};
use crate::models::{
    ClosestCoffeeResponse, ErrorResponse, HealthResponse, PredictRequest, PredictResponse,
    RecommendResponse, UserPreferences,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn QualityClassifier>,
    pub recommender: Recommender,
}

/// Configure all coffee routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/predict/", web::post().to(predict_quality))
        .route("/recommend/", web::post().to(recommend_coffees))
        .route("/find_closest_coffee/", web::post().to(find_closest_coffee));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        labels: state.classifier.labels().to_vec(),
        catalog_size: state.recommender.catalog().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Quality prediction endpoint
///
/// POST /predict/
///
/// Request body:
/// ```json
/// {
///   "moisture_percentage": 12.0, "altitude": 1500, "country_encoded": 1,
///   "aroma": 8.0, "flavor": 7.5, "aftertaste": 7.0, "acidity": 6.0,
///   "body": 7.0, "balance": 7.5, "sweetness": 8.0
/// }
/// ```
async fn predict_quality(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.classifier.predict(&req.feature_vector()) {
        Ok(quality) => {
            tracing::debug!("Predicted quality {:?}", quality);
            HttpResponse::Ok().json(PredictResponse { quality })
        }
        Err(e) => {
            tracing::error!("Classifier failed on predict request: {}", e);
            internal_error("Prediction failed", &e)
        }
    }
}

/// Recommendation endpoint
///
/// POST /recommend/
///
/// Request body:
/// ```json
/// { "aroma": 8.0, "flavor": 7.5, "acidity": 6.0, "body": 7.0, "sweetness": 8.0 }
/// ```
async fn recommend_coffees(
    state: web::Data<AppState>,
    prefs: web::Json<UserPreferences>,
) -> impl Responder {
    let result = match state.recommender.rank(state.classifier.as_ref(), &prefs) {
        Ok(result) => result,
        Err(e) => return recommend_error_response(&e),
    };

    tracing::info!(
        "Returning {} recommendations ({} of {} catalog entries qualified)",
        result.ranked.len(),
        result.qualified,
        result.total_candidates
    );

    HttpResponse::Ok().json(RecommendResponse {
        recommendations: result.ranked.into_iter().map(Into::into).collect(),
    })
}

/// Closest coffee endpoint
///
/// POST /find_closest_coffee/
///
/// Same body as `/recommend/`; returns only the best match and its label.
async fn find_closest_coffee(
    state: web::Data<AppState>,
    prefs: web::Json<UserPreferences>,
) -> impl Responder {
    match state.recommender.find_closest(state.classifier.as_ref(), &prefs) {
        Ok(Some(closest)) => HttpResponse::Ok().json(ClosestCoffeeResponse {
            closest_coffee_id: closest.coffee_id,
            similarity_score: closest.similarity_score,
            quality: closest.quality,
        }),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse {
            error: "No matching coffee".to_string(),
            message: format!(
                "No catalog entry is labeled {:?}",
                state.recommender.target_label()
            ),
            status_code: 404,
        }),
        Err(e) => recommend_error_response(&e),
    }
}

fn recommend_error_response(err: &RecommendError) -> HttpResponse {
    match err {
        RecommendError::DimensionMismatch { .. } | RecommendError::MissingPreference(_) => {
            tracing::info!("Rejected preferences: {}", err);
            HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "Invalid preferences".to_string(),
                message: err.to_string(),
                status_code: 422,
            })
        }
        RecommendError::Classifier(e) => {
            tracing::error!("Classifier failed while ranking catalog: {}", e);
            internal_error("Recommendation failed", e)
        }
    }
}

fn internal_error(error: &str, cause: &dyn std::fmt::Display) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: error.to_string(),
        message: cause.to_string(),
        status_code: 500,
    })
}
