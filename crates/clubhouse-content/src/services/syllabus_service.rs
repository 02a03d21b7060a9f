use chrono::Utc;
use clubhouse_entities::syllabus_entries;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use super::types::{
    ContentError, CreateSyllabusEntryRequest, Paginated, SyllabusEntryResponse,
    UpdateSyllabusEntryRequest,
};

/// Service for managing syllabus entries
pub struct SyllabusService {
    db: Arc<DatabaseConnection>,
}

impl SyllabusService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create_entry(
        &self,
        request: CreateSyllabusEntryRequest,
    ) -> Result<SyllabusEntryResponse, ContentError> {
        if !(1..=8).contains(&request.semester) {
            return Err(ContentError::Validation(
                "Semester must be between 1 and 8".to_string(),
            ));
        }

        let now = Utc::now();
        let entry = syllabus_entries::ActiveModel {
            subject: Set(request.subject),
            semester: Set(request.semester),
            content: Set(request.content),
            file_url: Set(request.file_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(entry.insert(self.db.as_ref()).await?.into())
    }

    pub async fn update_entry(
        &self,
        id: i32,
        request: UpdateSyllabusEntryRequest,
    ) -> Result<SyllabusEntryResponse, ContentError> {
        let entry = syllabus_entries::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;

        let mut active: syllabus_entries::ActiveModel = entry.into();
        if let Some(subject) = request.subject {
            active.subject = Set(subject);
        }
        if let Some(semester) = request.semester {
            if !(1..=8).contains(&semester) {
                return Err(ContentError::Validation(
                    "Semester must be between 1 and 8".to_string(),
                ));
            }
            active.semester = Set(semester);
        }
        if let Some(content) = request.content {
            active.content = Set(content);
        }
        if let Some(file_url) = request.file_url {
            active.file_url = Set(Some(file_url));
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(self.db.as_ref()).await?.into())
    }

    pub async fn get_entry(&self, id: i32) -> Result<SyllabusEntryResponse, ContentError> {
        let entry = syllabus_entries::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        Ok(entry.into())
    }

    pub async fn delete_entry(&self, id: i32) -> Result<(), ContentError> {
        let entry = syllabus_entries::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        entry.delete(self.db.as_ref()).await?;
        Ok(())
    }

    /// List entries ordered by semester then subject
    pub async fn list_entries(
        &self,
        semester: Option<i32>,
        page: u64,
        page_size: u64,
    ) -> Result<Paginated<SyllabusEntryResponse>, ContentError> {
        let mut query = syllabus_entries::Entity::find()
            .order_by_asc(syllabus_entries::Column::Semester)
            .order_by_asc(syllabus_entries::Column::Subject);
        if let Some(semester) = semester {
            query = query.filter(syllabus_entries::Column::Semester.eq(semester));
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
}
