use chrono::Utc;
use clubhouse_entities::announcements;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryOrder, Set,
};
use std::sync::Arc;

use super::types::{
    AnnouncementResponse, ContentError, CreateAnnouncementRequest, Paginated,
    UpdateAnnouncementRequest,
};

/// Service for managing announcements
pub struct AnnouncementService {
    db: Arc<DatabaseConnection>,
}

impl AnnouncementService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create_announcement(
        &self,
        request: CreateAnnouncementRequest,
    ) -> Result<AnnouncementResponse, ContentError> {
        if request.title.trim().is_empty() {
            return Err(ContentError::Validation(
                "Title must not be empty".to_string(),
            ));
        }

        let now = Utc::now();
        let announcement = announcements::ActiveModel {
            title: Set(request.title),
            body: Set(request.body),
            pinned: Set(request.pinned),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(announcement.insert(self.db.as_ref()).await?.into())
    }

    pub async fn update_announcement(
        &self,
        id: i32,
        request: UpdateAnnouncementRequest,
    ) -> Result<AnnouncementResponse, ContentError> {
        let announcement = announcements::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;

        let mut active: announcements::ActiveModel = announcement.into();
        if let Some(title) = request.title {
            active.title = Set(title);
        }
        if let Some(body) = request.body {
            active.body = Set(body);
        }
        if let Some(pinned) = request.pinned {
            active.pinned = Set(pinned);
        }
        active.updated_at = Set(Utc::now());

        Ok(active.update(self.db.as_ref()).await?.into())
    }

    pub async fn get_announcement(&self, id: i32) -> Result<AnnouncementResponse, ContentError> {
        let announcement = announcements::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        Ok(announcement.into())
    }

    pub async fn delete_announcement(&self, id: i32) -> Result<(), ContentError> {
        let announcement = announcements::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        announcement.delete(self.db.as_ref()).await?;
        Ok(())
    }

    /// Pinned announcements sort first, then newest first
    pub async fn list_announcements(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<Paginated<AnnouncementResponse>, ContentError> {
        let query = announcements::Entity::find()
            .order_by_desc(announcements::Column::Pinned)
            .order_by_desc(announcements::Column::CreatedAt);

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
