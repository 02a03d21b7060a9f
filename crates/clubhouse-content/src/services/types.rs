use clubhouse_core::UtcDateTime;
use clubhouse_entities::types::ExamType;
use clubhouse_entities::{
    announcements, blogs, lab_manuals, question_papers, syllabus_entries, textbooks,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("Not found")]
    NotFound,
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Paginated list wrapper shared by all content list endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T: ToSchema> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

pub type BlogPage = Paginated<BlogResponse>;
pub type LabManualPage = Paginated<LabManualResponse>;
pub type QuestionPaperPage = Paginated<QuestionPaperResponse>;
pub type TextbookPage = Paginated<TextbookResponse>;
pub type SyllabusPage = Paginated<SyllabusEntryResponse>;
pub type AnnouncementPage = Paginated<AnnouncementResponse>;

// ---------------------------------------------------------------------------
// Blogs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlogResponse {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    pub published: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: UtcDateTime,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: UtcDateTime,
}

impl From<blogs::Model> for BlogResponse {
    fn from(m: blogs::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            slug: m.slug,
            content: m.content,
            author: m.author,
            published: m.published,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Library resources (lab manuals, question papers, textbooks)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLabManualRequest {
    pub title: String,
    pub subject: String,
    pub semester: i32,
    pub file_url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateQuestionPaperRequest {
    pub title: String,
    pub subject: String,
    pub semester: i32,
    pub year: i32,
    pub exam_type: ExamType,
    pub file_url: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTextbookRequest {
    pub title: String,
    pub subject: String,
    pub author: String,
    pub edition: Option<String>,
    pub file_url: String,
}

/// Subject/semester filter shared by the library list endpoints
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LibraryFilter {
    pub subject: Option<String>,
    pub semester: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LabManualResponse {
    pub id: i32,
    pub title: String,
    pub subject: String,
    pub semester: i32,
    pub file_url: String,
    pub description: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: UtcDateTime,
}

impl From<lab_manuals::Model> for LabManualResponse {
    fn from(m: lab_manuals::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            subject: m.subject,
            semester: m.semester,
            file_url: m.file_url,
            description: m.description,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionPaperResponse {
    pub id: i32,
    pub title: String,
    pub subject: String,
    pub semester: i32,
    pub year: i32,
    pub exam_type: ExamType,
    pub file_url: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: UtcDateTime,
}

impl From<question_papers::Model> for QuestionPaperResponse {
    fn from(m: question_papers::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            subject: m.subject,
            semester: m.semester,
            year: m.year,
            exam_type: m.exam_type,
            file_url: m.file_url,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TextbookResponse {
    pub id: i32,
    pub title: String,
    pub subject: String,
    pub author: String,
    pub edition: Option<String>,
    pub file_url: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: UtcDateTime,
}

impl From<textbooks::Model> for TextbookResponse {
    fn from(m: textbooks::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            subject: m.subject,
            author: m.author,
            edition: m.edition,
            file_url: m.file_url,
            created_at: m.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Syllabus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSyllabusEntryRequest {
    pub subject: String,
    pub semester: i32,
    pub content: String,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateSyllabusEntryRequest {
    pub subject: Option<String>,
    pub semester: Option<i32>,
    pub content: Option<String>,
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SyllabusEntryResponse {
    pub id: i32,
    pub subject: String,
    pub semester: i32,
    pub content: String,
    pub file_url: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: UtcDateTime,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: UtcDateTime,
}

impl From<syllabus_entries::Model> for SyllabusEntryResponse {
    fn from(m: syllabus_entries::Model) -> Self {
        Self {
            id: m.id,
            subject: m.subject,
            semester: m.semester,
            content: m.content,
            file_url: m.file_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub pinned: bool,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateAnnouncementRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub pinned: Option<bool>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnnouncementResponse {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub pinned: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: UtcDateTime,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: UtcDateTime,
}

impl From<announcements::Model> for AnnouncementResponse {
    fn from(m: announcements::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            body: m.body,
            pinned: m.pinned,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
