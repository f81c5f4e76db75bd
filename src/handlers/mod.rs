pub mod session_handler;
pub mod subject_handler;

use actix_web::web;

pub use session_handler::{
    create_session, delete_session, get_quiz, get_session, list_sessions, regenerate_quiz,
    select_session, submit_document,
};
pub use subject_handler::{
    active_selection, create_subject, delete_subject, health_check, list_subjects, select_subject,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(active_selection)
        .service(list_subjects)
        .service(create_subject)
        .service(select_subject)
        .service(delete_subject)
        .service(list_sessions)
        .service(create_session)
        .service(get_session)
        .service(select_session)
        .service(delete_session)
        .service(submit_document)
        .service(get_quiz)
        .service(regenerate_quiz);
}
