use chrono::Utc;
use clubhouse_core::utils::unique_slug;
use clubhouse_entities::blogs;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::info;

use super::types::{BlogResponse, ContentError, CreateBlogRequest, Paginated, UpdateBlogRequest};

/// Service for managing blog posts
pub struct BlogService {
    db: Arc<DatabaseConnection>,
}

impl BlogService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create_blog(
        &self,
        request: CreateBlogRequest,
    ) -> Result<BlogResponse, ContentError> {
        if request.title.trim().is_empty() {
            return Err(ContentError::Validation(
                "Title must not be empty".to_string(),
            ));
        }

        let slug = self.reserve_slug(&request.title).await?;
        let now = Utc::now();

        let blog = blogs::ActiveModel {
            title: Set(request.title.trim().to_string()),
            slug: Set(slug),
            content: Set(request.content),
            author: Set(request.author),
            published: Set(request.published),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let blog = blog.insert(self.db.as_ref()).await?;
        info!(blog_id = blog.id, slug = %blog.slug, "created blog post");
        Ok(blog.into())
    }

    /// Pick the first free slug for a title, suffixing on collision
    async fn reserve_slug(&self, title: &str) -> Result<String, ContentError> {
        for attempt in 0..50 {
            let candidate = unique_slug(title, attempt);
            if candidate.is_empty() {
                return Err(ContentError::Validation(
                    "Title must contain at least one alphanumeric character".to_string(),
                ));
            }

            let taken = blogs::Entity::find()
                .filter(blogs::Column::Slug.eq(&candidate))
                .one(self.db.as_ref())
                .await?
                .is_some();

            if !taken {
                return Ok(candidate);
            }
        }

        Err(ContentError::Validation(
            "Could not find a free slug for this title".to_string(),
        ))
    }

    pub async fn update_blog(
        &self,
        id: i32,
        request: UpdateBlogRequest,
    ) -> Result<BlogResponse, ContentError> {
        let blog = blogs::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;

        let mut active: blogs::ActiveModel = blog.into();
        if let Some(title) = request.title {
            if title.trim().is_empty() {
                return Err(ContentError::Validation(
                    "Title must not be empty".to_string(),
                ));
            }
            // The slug stays stable across edits so public links keep working
            active.title = Set(title.trim().to_string());
        }
        if let Some(content) = request.content {
            active.content = Set(content);
        }
        if let Some(author) = request.author {
            active.author = Set(author);
        }
        if let Some(published) = request.published {
            active.published = Set(published);
        }
        active.updated_at = Set(Utc::now());

        let blog = active.update(self.db.as_ref()).await?;
        Ok(blog.into())
    }

    pub async fn delete_blog(&self, id: i32) -> Result<(), ContentError> {
        let blog = blogs::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;

        blog.delete(self.db.as_ref()).await?;
        Ok(())
    }

    pub async fn get_blog(&self, id: i32) -> Result<BlogResponse, ContentError> {
        let blog = blogs::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        Ok(blog.into())
    }

    /// Public lookup by slug; drafts are invisible here
    pub async fn get_published_blog_by_slug(
        &self,
        slug: &str,
    ) -> Result<BlogResponse, ContentError> {
        let blog = blogs::Entity::find()
            .filter(blogs::Column::Slug.eq(slug))
            .filter(blogs::Column::Published.eq(true))
            .one(self.db.as_ref())
            .await?
            .ok_or(ContentError::NotFound)?;
        Ok(blog.into())
    }

    /// List posts, newest first. `published_only` hides drafts (public
    /// listing); the admin listing passes `false`.
    pub async fn list_blogs(
        &self,
        page: u64,
        page_size: u64,
        published_only: bool,
    ) -> Result<Paginated<BlogResponse>, ContentError> {
        let mut query = blogs::Entity::find().order_by_desc(blogs::Column::CreatedAt);
        if published_only {
            query = query.filter(blogs::Column::Published.eq(true));
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
