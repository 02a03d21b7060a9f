use chrono::Utc;
use clubhouse_entities::{lab_manuals, question_papers, textbooks};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use super::types::{
    ContentError, CreateLabManualRequest, CreateQuestionPaperRequest, CreateTextbookRequest,
    LabManualResponse, LibraryFilter, Paginated, QuestionPaperResponse, TextbookResponse,
};

/// Service for the study material library: lab manuals, question papers
/// and textbooks.
pub struct LibraryService {
    db: Arc<DatabaseConnection>,
}

impl LibraryService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // -----------------------------------------------------------------
    // Lab manuals
    // -----------------------------------------------------------------

    pub async fn create_lab_manual(
        &self,
        request: CreateLabManualRequest,
    ) -> Result<LabManualResponse, ContentError> {
        validate_semester(request.semester)?;

        let manual = lab_manuals::ActiveModel {
            title: Set(request.title),
            subject: Set(request.subject),
            semester: Set(request.semester),
            file_url: Set(request.file_url),
            description: Set(request.description),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(manual.insert(self.db.as_ref()).await?.into())
    }

    pub async fn get_lab_manual(&self, id: i32) -> Result<LabManualResponse, ContentError> {
        let manual = lab_manuals::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        Ok(manual.into())
    }

    pub async fn delete_lab_manual(&self, id: i32) -> Result<(), ContentError> {
        let manual = lab_manuals::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        manual.delete(self.db.as_ref()).await?;
        Ok(())
    }

    pub async fn list_lab_manuals(
        &self,
        filter: LibraryFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Paginated<LabManualResponse>, ContentError> {
        let mut query = lab_manuals::Entity::find().order_by_desc(lab_manuals::Column::CreatedAt);
        if let Some(subject) = filter.subject {
            query = query.filter(lab_manuals::Column::Subject.eq(subject));
        }
        if let Some(semester) = filter.semester {
            query = query.filter(lab_manuals::Column::Semester.eq(semester));
        }

        let paginator = query.paginate(self.db.as_ref(), page_size);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page - 1).await?;

        Ok(Paginated {
            items: items.into_iter().map(Into::into).collect(),
            total,
            page,
            page_size,
        })
    }

    // -----------------------------------------------------------------
    // Question papers
    // -----------------------------------------------------------------

    pub async fn create_question_paper(
        &self,
        request: CreateQuestionPaperRequest,
    ) -> Result<QuestionPaperResponse, ContentError> {
        validate_semester(request.semester)?;

        let paper = question_papers::ActiveModel {
            title: Set(request.title),
            subject: Set(request.subject),
            semester: Set(request.semester),
            year: Set(request.year),
            exam_type: Set(request.exam_type),
            file_url: Set(request.file_url),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(paper.insert(self.db.as_ref()).await?.into())
    }

    pub async fn get_question_paper(&self, id: i32) -> Result<QuestionPaperResponse, ContentError> {
        let paper = question_papers::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        Ok(paper.into())
    }

    pub async fn delete_question_paper(&self, id: i32) -> Result<(), ContentError> {
        let paper = question_papers::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        paper.delete(self.db.as_ref()).await?;
        Ok(())
    }

    pub async fn list_question_papers(
        &self,
        filter: LibraryFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Paginated<QuestionPaperResponse>, ContentError> {
        let mut query = question_papers::Entity::find()
            .order_by_desc(question_papers::Column::Year)
            .order_by_asc(question_papers::Column::Subject);
        if let Some(subject) = filter.subject {
            query = query.filter(question_papers::Column::Subject.eq(subject));
        }
        if let Some(semester) = filter.semester {
            query = query.filter(question_papers::Column::Semester.eq(semester));
        }

        let paginator = query.paginate(self.db.as_ref(), page_size);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page - 1).await?;

        Ok(Paginated {
            items: items.into_iter().map(Into::into).collect(),
            total,
            page,
            page_size,
        })
    }

    // -----------------------------------------------------------------
    // Textbooks
    // -----------------------------------------------------------------

    pub async fn create_textbook(
        &self,
        request: CreateTextbookRequest,
    ) -> Result<TextbookResponse, ContentError> {
        let textbook = textbooks::ActiveModel {
            title: Set(request.title),
            subject: Set(request.subject),
            author: Set(request.author),
            edition: Set(request.edition),
            file_url: Set(request.file_url),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        Ok(textbook.insert(self.db.as_ref()).await?.into())
    }

    pub async fn get_textbook(&self, id: i32) -> Result<TextbookResponse, ContentError> {
        let textbook = textbooks::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        Ok(textbook.into())
    }

    pub async fn delete_textbook(&self, id: i32) -> Result<(), ContentError> {
        let textbook = textbooks::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        textbook.delete(self.db.as_ref()).await?;
        Ok(())
    }

    pub async fn list_textbooks(
        &self,
        filter: LibraryFilter,
        page: u64,
        page_size: u64,
    ) -> Result<Paginated<TextbookResponse>, ContentError> {
        let mut query = textbooks::Entity::find().order_by_asc(textbooks::Column::Title);
        if let Some(subject) = filter.subject {
            query = query.filter(textbooks::Column::Subject.eq(subject));
        }
        // Textbooks are not tied to a semester; the filter field is ignored

        let paginator = query.paginate(self.db.as_ref(), page_size);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page - 1).await?;

        Ok(Paginated {
            items: items.into_iter().map(Into::into).collect(),
            total,
            page,
            page_size,
        })
    }
}

fn validate_semester(semester: i32) -> Result<(), ContentError> {
    if !(1..=8).contains(&semester) {
        return Err(ContentError::Validation(
            "Semester must be between 1 and 8".to_string(),
        ));
    }
    Ok(())
}
