//! Analytics plugin: page view tracking and statistics endpoints

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use clubhouse_core::plugin::{
    ClubhousePlugin, PluginContext, PluginError, PluginRoutes, ServiceRegistrationContext,
};
use utoipa::{openapi::OpenApi, OpenApi as OpenApiTrait};

use crate::handler::{configure_routes, AnalyticsApiDoc, AppState};
use crate::{Analytics, AnalyticsService};

pub struct AnalyticsPlugin;

impl AnalyticsPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnalyticsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ClubhousePlugin for AnalyticsPlugin {
    fn name(&self) -> &'static str {
        "analytics"
    }

    fn register_services<'a>(
        &'a self,
        context: &'a ServiceRegistrationContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + 'a>> {
        Box::pin(async move {
            let db = context.require_service::<sea_orm::DatabaseConnection>();

            let analytics_service = Arc::new(AnalyticsService::new(db));

            // Register the service with both the concrete type and trait
            context.register_service(analytics_service.clone());
            let analytics_trait: Arc<dyn Analytics> = analytics_service;
            context.register_service(analytics_trait);

            tracing::debug!("Analytics plugin services registered successfully");
            Ok(())
        })
    }

    fn configure_routes(&self, context: &PluginContext) -> Option<PluginRoutes> {
        let analytics_service = context.require_service::<dyn Analytics>();

        let app_state = Arc::new(AppState { analytics_service });
        let routes = configure_routes().with_state(app_state);

        Some(PluginRoutes { router: routes })
    }

    fn openapi_schema(&self) -> Option<OpenApi> {
        Some(AnalyticsApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_plugin_name() {
        let analytics_plugin = AnalyticsPlugin::new();
        assert_eq!(analytics_plugin.name(), "analytics");
    }
}
