//! Assistant plugin: the chat endpoint

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use clubhouse_core::plugin::{
    ClubhousePlugin, PluginContext, PluginError, PluginRoutes, ServiceRegistrationContext,
};
use utoipa::{openapi::OpenApi, OpenApi as OpenApiTrait};

use crate::handler::{configure_routes, AppState, AssistantApiDoc};
use crate::service::{AssistantConfig, AssistantService};

pub struct AssistantPlugin {
    config: AssistantConfig,
}

impl AssistantPlugin {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }
}

impl ClubhousePlugin for AssistantPlugin {
    fn name(&self) -> &'static str {
        "assistant"
    }

    fn register_services<'a>(
        &'a self,
        context: &'a ServiceRegistrationContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + 'a>> {
        Box::pin(async move {
            let assistant_service = Arc::new(AssistantService::new(self.config.clone()));
            context.register_service(assistant_service);

            tracing::debug!("Assistant plugin services registered successfully");
            Ok(())
        })
    }

    fn configure_routes(&self, context: &PluginContext) -> Option<PluginRoutes> {
        let assistant_service = context.require_service::<AssistantService>();

        let app_state = Arc::new(AppState { assistant_service });
        let routes = configure_routes().with_state(app_state);

        Some(PluginRoutes { router: routes })
    }

    fn openapi_schema(&self) -> Option<OpenApi> {
        Some(AssistantApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assistant_plugin_name() {
        let plugin = AssistantPlugin::new(AssistantConfig {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: "test".to_string(),
            model: "gpt-4o-mini".to_string(),
        });
        assert_eq!(plugin.name(), "assistant");
    }
}
