use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{CreateSessionRequestDto, GenerateQuizParams, SessionPath},
        response::{ActiveSelectionDto, ApiResponse, QuizDocumentDto, StudySessionDto},
    },
};

#[get("/api/subjects/{subject}/sessions")]
async fn list_sessions(
    state: web::Data<AppState>,
    subject: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sessions = state.session_controller.list_sessions(&subject).await?;
    let response: Vec<StudySessionDto> = sessions.iter().map(StudySessionDto::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/subjects/{subject}/sessions")]
async fn create_session(
    state: web::Data<AppState>,
    subject: web::Path<String>,
    request: web::Json<CreateSessionRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let session = state
        .session_controller
        .create_session(&subject, request.display_name.as_deref())
        .await?;
    Ok(HttpResponse::Created().json(StudySessionDto::from(session)))
}

#[get("/api/subjects/{subject}/sessions/{session_id}")]
async fn get_session(
    state: web::Data<AppState>,
    path: web::Path<SessionPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.session_uuid()?;
    let session = state.session_controller.get_session(&path.subject, &id).await?;
    Ok(HttpResponse::Ok().json(StudySessionDto::from(session)))
}

#[put("/api/subjects/{subject}/sessions/{session_id}/select")]
async fn select_session(
    state: web::Data<AppState>,
    path: web::Path<SessionPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.session_uuid()?;
    state.session_controller.select_session(&path.subject, &id).await?;
    let active = state.session_controller.active_selection().await?;
    Ok(HttpResponse::Ok().json(ActiveSelectionDto::from(active)))
}

#[delete("/api/subjects/{subject}/sessions/{session_id}")]
async fn delete_session(
    state: web::Data<AppState>,
    path: web::Path<SessionPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.session_uuid()?;
    let removed = state.session_controller.delete_session(&path.subject, &id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse {
        data: StudySessionDto::from(removed),
        message: "Session deleted".to_string(),
    }))
}

/// Body is the raw document; the quiz style comes from the query string.
#[post("/api/subjects/{subject}/sessions/{session_id}/quiz")]
async fn submit_document(
    state: web::Data<AppState>,
    path: web::Path<SessionPath>,
    params: web::Query<GenerateQuizParams>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let id = path.session_uuid()?;
    let document = state
        .session_controller
        .submit_document(&path.subject, &id, body.to_vec(), params.style)
        .await?;

    let session = state.session_controller.get_session(&path.subject, &id).await?;
    Ok(HttpResponse::Created().json(QuizDocumentDto::new(id, document, session.quiz.as_ref())))
}

#[get("/api/subjects/{subject}/sessions/{session_id}/quiz")]
async fn get_quiz(
    state: web::Data<AppState>,
    path: web::Path<SessionPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.session_uuid()?;
    let (session, document) = state
        .session_controller
        .quiz_document(&path.subject, &id)
        .await?;
    Ok(HttpResponse::Ok().json(QuizDocumentDto::new(id, document, session.quiz.as_ref())))
}

/// Regenerate: discard the quiz so a new document can be submitted.
#[delete("/api/subjects/{subject}/sessions/{session_id}/quiz")]
async fn regenerate_quiz(
    state: web::Data<AppState>,
    path: web::Path<SessionPath>,
) -> Result<HttpResponse, AppError> {
    let id = path.session_uuid()?;
    let session = state.session_controller.regenerate(&path.subject, &id).await?;
    Ok(HttpResponse::Ok().json(StudySessionDto::from(session)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::Config,
        repositories::InMemoryStudyHierarchyRepository,
        services::{model_service::MockQuizGenerator, page_extractor::MockPageTextExtractor},
        test_utils::fixtures::{sample_pages, sample_quiz_raw},
    };
    use actix_web::{http::StatusCode, test, App};

    fn test_state() -> web::Data<AppState> {
        let mut extractor = MockPageTextExtractor::new();
        extractor.expect_extract().returning(|_| Ok(sample_pages()));
        let mut generator = MockQuizGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Ok(sample_quiz_raw()));

        web::Data::new(AppState::with_components(
            Config::test_config(),
            Arc::new(InMemoryStudyHierarchyRepository::new()),
            Arc::new(extractor),
            Arc::new(generator),
        ))
    }

    #[actix_web::test]
    async fn test_session_quiz_lifecycle() {
        let state = test_state();
        state
            .session_controller
            .create_subject("Biology")
            .await
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(create_session)
                .service(submit_document)
                .service(get_quiz)
                .service(regenerate_quiz),
        )
        .await;

        let create = test::TestRequest::post()
            .uri("/api/subjects/Biology/sessions")
            .set_json(serde_json::json!({ "display_name": "Week 1" }))
            .to_request();
        let session: serde_json::Value = test::call_and_read_body_json(&app, create).await;
        assert_eq!(session["state"], "EMPTY");
        let id = session["id"].as_str().unwrap().to_string();

        let submit = test::TestRequest::post()
            .uri(&format!(
                "/api/subjects/Biology/sessions/{}/quiz?style=TRUE_FALSE",
                id
            ))
            .set_payload(b"%PDF-1.4 fake".to_vec())
            .to_request();
        let resp = test::call_service(&app, submit).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let fetch = test::TestRequest::get()
            .uri(&format!("/api/subjects/Biology/sessions/{}/quiz", id))
            .to_request();
        let quiz: serde_json::Value = test::call_and_read_body_json(&app, fetch).await;
        assert!(quiz["question_block"].as_str().unwrap().contains("Q1."));
        assert_eq!(quiz["citations"].as_array().unwrap().len(), 5);
        assert_eq!(quiz["quiz"]["style"], "TRUE_FALSE");

        let regenerate = test::TestRequest::delete()
            .uri(&format!("/api/subjects/Biology/sessions/{}/quiz", id))
            .to_request();
        let cleared: serde_json::Value = test::call_and_read_body_json(&app, regenerate).await;
        assert_eq!(cleared["state"], "EMPTY");

        let fetch_again = test::TestRequest::get()
            .uri(&format!("/api/subjects/Biology/sessions/{}/quiz", id))
            .to_request();
        let resp = test::call_service(&app, fetch_again).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_create_session_in_unknown_subject() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .service(create_session),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/subjects/Biology/sessions")
            .set_json(serde_json::json!({ "display_name": "Week 1" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_submit_with_unknown_style_is_bad_request() {
        let state = test_state();
        state
            .session_controller
            .create_subject("Biology")
            .await
            .unwrap();
        let session = state
            .session_controller
            .create_session("Biology", Some("Week 1"))
            .await
            .unwrap();
        let app = test::init_service(App::new().app_data(state).service(submit_document)).await;

        let req = test::TestRequest::post()
            .uri(&format!(
                "/api/subjects/Biology/sessions/{}/quiz?style=ESSAY",
                session.id
            ))
            .set_payload(b"%PDF-1.4".to_vec())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
