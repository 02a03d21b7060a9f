mod announcements;
mod blogs;
mod library;
mod syllabus;

use crate::services::{
    AnnouncementService, BlogService, ContentError, LibraryService, SyllabusService,
};
use axum::Router;
use clubhouse_core::error_builder::{bad_request, internal_server_error, not_found};
use clubhouse_core::problemdetails::Problem;
use std::sync::Arc;
use tracing::error;
use utoipa::OpenApi;

pub struct AppState {
    pub blog_service: Arc<BlogService>,
    pub library_service: Arc<LibraryService>,
    pub syllabus_service: Arc<SyllabusService>,
    pub announcement_service: Arc<AnnouncementService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        blogs::list_published_blogs,
        blogs::list_all_blogs,
        blogs::get_blog_by_slug,
        blogs::get_blog,
        blogs::create_blog,
        blogs::update_blog,
        blogs::delete_blog,
        library::list_lab_manuals,
        library::get_lab_manual,
        library::create_lab_manual,
        library::delete_lab_manual,
        library::list_question_papers,
        library::get_question_paper,
        library::create_question_paper,
        library::delete_question_paper,
        library::list_textbooks,
        library::get_textbook,
        library::create_textbook,
        library::delete_textbook,
        syllabus::list_syllabus_entries,
        syllabus::get_syllabus_entry,
        syllabus::create_syllabus_entry,
        syllabus::update_syllabus_entry,
        syllabus::delete_syllabus_entry,
        announcements::list_announcements,
        announcements::get_announcement,
        announcements::create_announcement,
        announcements::update_announcement,
        announcements::delete_announcement,
    ),
    components(schemas(
        crate::services::BlogResponse,
        crate::services::CreateBlogRequest,
        crate::services::UpdateBlogRequest,
        crate::services::BlogPage,
        crate::services::LabManualResponse,
        crate::services::CreateLabManualRequest,
        crate::services::LabManualPage,
        crate::services::QuestionPaperResponse,
        crate::services::CreateQuestionPaperRequest,
        crate::services::QuestionPaperPage,
        crate::services::TextbookResponse,
        crate::services::CreateTextbookRequest,
        crate::services::TextbookPage,
        crate::services::SyllabusEntryResponse,
        crate::services::CreateSyllabusEntryRequest,
        crate::services::UpdateSyllabusEntryRequest,
        crate::services::SyllabusPage,
        crate::services::AnnouncementResponse,
        crate::services::CreateAnnouncementRequest,
        crate::services::UpdateAnnouncementRequest,
        crate::services::AnnouncementPage,
    )),
    tags(
        (name = "Content", description = "Public content and the admin CRUD panel")
    )
)]
pub struct ContentApiDoc;

pub fn configure_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(blogs::routes())
        .merge(library::routes())
        .merge(syllabus::routes())
        .merge(announcements::routes())
}

pub(crate) fn map_error(error: ContentError) -> Problem {
    match error {
        ContentError::NotFound => not_found().detail("Resource not found").build(),
        ContentError::Validation(msg) => bad_request().detail(msg).build(),
        ContentError::Database(e) => {
            error!("Content query failed: {}", e);
            internal_server_error().build()
        }
    }
}
