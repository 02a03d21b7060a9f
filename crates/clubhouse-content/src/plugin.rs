//! Content plugin: public content endpoints and the admin CRUD panel

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use clubhouse_core::plugin::{
    ClubhousePlugin, PluginContext, PluginError, PluginRoutes, ServiceRegistrationContext,
};
use utoipa::{openapi::OpenApi, OpenApi as OpenApiTrait};

use crate::handlers::{configure_routes, AppState, ContentApiDoc};
use crate::services::{AnnouncementService, BlogService, LibraryService, SyllabusService};

pub struct ContentPlugin;

impl ContentPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ClubhousePlugin for ContentPlugin {
    fn name(&self) -> &'static str {
        "content"
    }

    fn register_services<'a>(
        &'a self,
        context: &'a ServiceRegistrationContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + 'a>> {
        Box::pin(async move {
            let db = context.require_service::<sea_orm::DatabaseConnection>();

            context.register_service(Arc::new(BlogService::new(db.clone())));
            context.register_service(Arc::new(LibraryService::new(db.clone())));
            context.register_service(Arc::new(SyllabusService::new(db.clone())));
            context.register_service(Arc::new(AnnouncementService::new(db)));

            tracing::debug!("Content plugin services registered successfully");
            Ok(())
        })
    }

    fn configure_routes(&self, context: &PluginContext) -> Option<PluginRoutes> {
        let app_state = Arc::new(AppState {
            blog_service: context.require_service::<BlogService>(),
            library_service: context.require_service::<LibraryService>(),
            syllabus_service: context.require_service::<SyllabusService>(),
            announcement_service: context.require_service::<AnnouncementService>(),
        });

        let routes = configure_routes().with_state(app_state);
        Some(PluginRoutes { router: routes })
    }

    fn openapi_schema(&self) -> Option<OpenApi> {
        Some(ContentApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_plugin_name() {
        let content_plugin = ContentPlugin::new();
        assert_eq!(content_plugin.name(), "content");
    }
}
