use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::eligibility::evaluator::{evaluate, EligibilityVerdict};
use crate::errors::AppError;
use crate::models::application::Application;
use crate::models::drive::{Drive, DriveCriteria};
use crate::models::student::Student;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CheckRequest {
    pub profile: Student,
    pub criteria: DriveCriteria,
}

#[derive(Deserialize)]
pub struct StudentIdQuery {
    pub student_id: String,
}

#[derive(Serialize)]
pub struct BoardEntry {
    pub drive: Drive,
    pub verdict: EligibilityVerdict,
    pub application: Option<Application>,
}

#[derive(Serialize)]
pub struct BoardResponse {
    pub student: Student,
    pub entries: Vec<BoardEntry>,
}

#[derive(Serialize)]
pub struct CandidateEntry {
    pub student: Student,
    pub verdict: EligibilityVerdict,
    pub application: Option<Application>,
}

#[derive(Serialize)]
pub struct CandidatesResponse {
    pub drive: Drive,
    pub candidates: Vec<CandidateEntry>,
}

/// POST /api/v1/eligibility/check
///
/// Pure evaluation of a caller-supplied profile against caller-supplied
/// criteria. Serves clients holding a locally cached profile; nothing is
/// read from or written to the store.
pub async fn handle_check(
    Json(req): Json<CheckRequest>,
) -> Result<Json<EligibilityVerdict>, AppError> {
    Ok(Json(evaluate(&req.profile, &req.criteria)))
}

/// GET /api/v1/eligibility/board?student_id=
///
/// The student-dashboard feed: every drive paired with this student's
/// verdict and their application, if they have one.
pub async fn handle_board(
    State(state): State<AppState>,
    Query(params): Query<StudentIdQuery>,
) -> Result<Json<BoardResponse>, AppError> {
    let students = state.store.load_students().await?;
    let student = students
        .into_iter()
        .find(|s| s.id == params.student_id)
        .ok_or_else(|| AppError::NotFound(format!("Student {} not found", params.student_id)))?;

    let drives = state.store.load_drives().await?;
    let applications = state.store.load_applications().await?;

    let entries = drives
        .into_iter()
        .map(|drive| {
            let verdict = evaluate(&student, &drive.criteria);
            let application = applications
                .iter()
                .find(|a| a.student_id == student.id && a.drive_id == drive.id)
                .cloned();
            BoardEntry {
                drive,
                verdict,
                application,
            }
        })
        .collect();

    Ok(Json(BoardResponse { student, entries }))
}

/// GET /api/v1/drives/:id/candidates
///
/// The company-portal feed: the whole roster paired with each student's
/// verdict for this drive and their application, if any.
pub async fn handle_candidates(
    State(state): State<AppState>,
    Path(drive_id): Path<String>,
) -> Result<Json<CandidatesResponse>, AppError> {
    let drives = state.store.load_drives().await?;
    let drive = drives
        .into_iter()
        .find(|d| d.id == drive_id)
        .ok_or_else(|| AppError::NotFound(format!("Drive {drive_id} not found")))?;

    let students = state.store.load_students().await?;
    let applications = state.store.load_applications().await?;

    let candidates = students
        .into_iter()
        .map(|student| {
            let verdict = evaluate(&student, &drive.criteria);
            let application = applications
                .iter()
                .find(|a| a.student_id == student.id && a.drive_id == drive.id)
                .cloned();
            CandidateEntry {
                student,
                verdict,
                application,
            }
        })
        .collect();

    Ok(Json(CandidatesResponse { drive, candidates }))
}
