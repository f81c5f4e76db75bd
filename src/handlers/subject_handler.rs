use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::SubjectCreation,
        dto::{
            request::CreateSubjectRequestDto,
            response::{ActiveSelectionDto, ApiResponse, CreateSubjectResponse, SubjectDto},
        },
    },
};

#[get("/api/subjects")]
async fn list_subjects(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let subjects = state.session_controller.list_subjects().await?;
    let response: Vec<SubjectDto> = subjects.iter().map(SubjectDto::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/subjects")]
async fn create_subject(
    state: web::Data<AppState>,
    request: web::Json<CreateSubjectRequestDto>,
) -> Result<HttpResponse, AppError> {
    let name = request.into_inner().into_name()?;
    let outcome = state.session_controller.create_subject(&name).await?;

    let (mut builder, message) = match outcome {
        SubjectCreation::Created => (HttpResponse::Created(), "Subject created"),
        SubjectCreation::AlreadyExists => (HttpResponse::Ok(), "Subject already exists; selected"),
    };

    Ok(builder.json(ApiResponse {
        data: CreateSubjectResponse { name, outcome },
        message: message.to_string(),
    }))
}

#[put("/api/subjects/{subject}/select")]
async fn select_subject(
    state: web::Data<AppState>,
    subject: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.session_controller.select_subject(&subject).await?;
    let active = state.session_controller.active_selection().await?;
    Ok(HttpResponse::Ok().json(ActiveSelectionDto::from(active)))
}

#[delete("/api/subjects/{subject}")]
async fn delete_subject(
    state: web::Data<AppState>,
    subject: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let removed = state.session_controller.delete_subject(&subject).await?;
    Ok(HttpResponse::Ok().json(ApiResponse {
        data: SubjectDto::from(&removed),
        message: "Subject deleted".to_string(),
    }))
}

#[get("/api/active")]
async fn active_selection(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let active = state.session_controller.active_selection().await?;
    Ok(HttpResponse::Ok().json(ActiveSelectionDto::from(active)))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
