use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Analyzer;
use crate::error::AnalysisError;
use crate::models::requests::MAX_SELECTED_SUGGESTIONS;
use crate::models::{
    AnalysisResponse, AnalyzeRequest, ExtractionResult, HealthResponse, SimulateRequest,
    SuggestionCategory,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

/// Configure all analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/analysis", web::post().to(analyze))
        .route("/analysis/simulate", web::post().to(simulate));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Analyze endpoint
///
/// POST /api/v1/analysis
///
/// Request body:
/// ```json
/// { "extraction": { "requiredSkills": [...], "resumeSkills": [...], ... } }
/// ```
async fn analyze(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, AnalysisError> {
    req.validate()?;
    warn_dangling_links(&req.extraction);

    let analysis = state.analyzer.analyze(&req.extraction);

    let response = AnalysisResponse {
        analysis_id: uuid::Uuid::new_v4().to_string(),
        scoring: analysis.scoring,
        text_suggestions: analysis.by_category(SuggestionCategory::Text),
        keyword_suggestions: analysis.by_category(SuggestionCategory::Keyword),
        other_suggestions: analysis.by_category(SuggestionCategory::Other),
        suggestions: analysis.suggestions,
    };

    tracing::info!(
        "Analysis {}: current={} potential={} callback={}->{} suggestions={}",
        response.analysis_id,
        response.scoring.current_score,
        response.scoring.potential_score,
        response.scoring.current_callback,
        response.scoring.potential_callback,
        response.suggestions.len()
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Targeted simulation endpoint
///
/// POST /api/v1/analysis/simulate
///
/// Request body:
/// ```json
/// { "extraction": { ... }, "suggestions": [{ "improvedText": "Skill: Kafka", "category": "keyword", ... }] }
/// ```
async fn simulate(
    state: web::Data<AppState>,
    req: web::Json<SimulateRequest>,
) -> Result<HttpResponse, AnalysisError> {
    req.validate()?;
    if req.suggestions.len() > MAX_SELECTED_SUGGESTIONS {
        return Err(AnalysisError::TooManySuggestions {
            count: req.suggestions.len(),
            max: MAX_SELECTED_SUGGESTIONS,
        });
    }
    warn_dangling_links(&req.extraction);

    let scoring = state.analyzer.simulate(&req.extraction, &req.suggestions);

    tracing::info!(
        "Simulated {} suggestions: current={} potential={}",
        req.suggestions.len(),
        scoring.current_score,
        scoring.potential_score
    );

    Ok(HttpResponse::Ok().json(scoring))
}

fn warn_dangling_links(extraction: &ExtractionResult) {
    for skill in extraction.dangling_links() {
        tracing::warn!(
            "Resume skill {:?} links to unknown requirement {:?}; treating as unlinked",
            skill.name,
            skill.linked_requirement
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState {
            analyzer: Arc::new(Analyzer::default()),
        })
    }

    fn sample_extraction() -> Value {
        json!({
            "requiredSkills": [
                {"name": "React", "importance": 3, "type": "hard"},
                {"name": "SQL", "importance": 2, "type": "hard"}
            ],
            "resumeSkills": [
                {"name": "React", "linkedRequirement": "React", "matchType": "exact", "locations": ["skills"]}
            ],
            "mustHaveSkills": [],
            "missingSkills": ["SQL"],
            "experience": {"requiredYears": 3, "candidateYears": 4, "requiredSeniority": "mid", "candidateSeniority": "mid"},
            "education": {"requiredDegreeLevel": "bachelor", "candidateDegreeLevel": "bachelor", "meetsMinimum": true, "bonusTierInstitution": false},
            "responsibilities": {"topJDResponsibilities": ["Build UI"], "matchedResponsibilitiesCount": 1, "totalResponsibilitiesConsidered": 2},
            "titles": {"jdTitle": "Frontend Engineer", "candidateCurrentTitle": "Web Developer", "candidateRecentTitles": [], "titleSimilarity": 0.5},
            "formatSignals": {"hasStandardSections": true, "isParseable": true, "hasContactInfo": true}
        })
    }

    #[actix_web::test]
    async fn test_health_check_response() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
    }

    #[actix_web::test]
    async fn test_analyze_returns_scores_and_suggestions() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/analysis")
            .set_json(json!({ "extraction": sample_extraction() }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["scoreBreakdown"]["skills"], 21);
        assert!(body["potentialScore"].as_u64().unwrap() >= body["currentScore"].as_u64().unwrap());
        assert_eq!(body["keywordSuggestions"][0]["improvedText"], "Skill: SQL");
        assert!(body["analysisId"].is_string());
    }

    #[actix_web::test]
    async fn test_analyze_rejects_invalid_importance() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let mut extraction = sample_extraction();
        extraction["requiredSkills"][0]["importance"] = json!(7);

        let req = test::TestRequest::post()
            .uri("/analysis")
            .set_json(json!({ "extraction": extraction }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_simulate_selected_keyword() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/analysis/simulate")
            .set_json(json!({
                "extraction": sample_extraction(),
                "suggestions": [{
                    "suggestion": "Add SQL",
                    "originalText": "",
                    "improvedText": "Skill: SQL",
                    "category": "keyword"
                }]
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["potentialScore"].as_u64().unwrap() > body["currentScore"].as_u64().unwrap());
    }
}
