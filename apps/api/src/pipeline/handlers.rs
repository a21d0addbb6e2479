use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::analyze;
use crate::errors::AppError;
use crate::models::{JDAnalysis, OptimizedResume, StructuredResume};
use crate::optimization::optimize;
use crate::parsing::parse;
use crate::pipeline::{tailor, TailoredResume};
use crate::render;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ParseRequest {
    pub resume_text: String,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub jd_text: String,
}

#[derive(Deserialize)]
pub struct OptimizeRequest {
    pub resume: StructuredResume,
    pub analysis: JDAnalysis,
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Deserialize)]
pub struct RenderRequest {
    pub resume: OptimizedResume,
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub text: String,
}

#[derive(Deserialize)]
pub struct TailorRequest {
    pub resume_text: String,
    pub jd_text: String,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<StructuredResume>, AppError> {
    check_len("resume_text", &req.resume_text, state.config.max_resume_chars)?;
    Ok(Json(parse(&req.resume_text)))
}

/// POST /api/v1/jobs/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<JDAnalysis>, AppError> {
    check_len("jd_text", &req.jd_text, state.config.max_jd_chars)?;
    Ok(Json(analyze(&req.jd_text)))
}

/// POST /api/v1/resumes/optimize
pub async fn handle_optimize(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizedResume>, AppError> {
    check_len("jd_text", &req.jd_text, state.config.max_jd_chars)?;
    let optimized = optimize(req.resume, &req.analysis, &req.jd_text)?;
    Ok(Json(optimized))
}

/// POST /api/v1/resumes/render
pub async fn handle_render(Json(req): Json<RenderRequest>) -> Json<RenderResponse> {
    Json(RenderResponse {
        text: render::format(&req.resume),
    })
}

/// POST /api/v1/resumes/tailor
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(req): Json<TailorRequest>,
) -> Result<Json<TailoredResume>, AppError> {
    check_len("resume_text", &req.resume_text, state.config.max_resume_chars)?;
    check_len("jd_text", &req.jd_text, state.config.max_jd_chars)?;
    Ok(Json(tailor(&req.resume_text, &req.jd_text)?))
}

fn check_len(field: &str, text: &str, max_chars: usize) -> Result<(), AppError> {
    let len = text.chars().count();
    if len > max_chars {
        return Err(AppError::Validation(format!(
            "{field} is {len} characters; the limit is {max_chars}"
        )));
    }
    Ok(())
}
