//! Auth plugin: registers the auth services and the login/logout routes

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use clubhouse_core::plugin::{
    ClubhousePlugin, PluginContext, PluginError, PluginRoutes, ServiceRegistrationContext,
};
use utoipa::{openapi::OpenApi, OpenApi as OpenApiTrait};

use crate::handlers::{configure_routes, AuthApiDoc};
use crate::AuthState;

pub struct AuthPlugin;

impl AuthPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AuthPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ClubhousePlugin for AuthPlugin {
    fn name(&self) -> &'static str {
        "auth"
    }

    fn register_services<'a>(
        &'a self,
        context: &'a ServiceRegistrationContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + 'a>> {
        Box::pin(async move {
            let db = context.require_service::<sea_orm::DatabaseConnection>();

            let auth_state = Arc::new(AuthState::new(db));
            context.register_service(auth_state.auth_service.clone());
            context.register_service(auth_state.user_service.clone());
            context.register_service(auth_state);

            tracing::debug!("Auth plugin services registered successfully");
            Ok(())
        })
    }

    fn configure_routes(&self, context: &PluginContext) -> Option<PluginRoutes> {
        let auth_state = context.require_service::<AuthState>();
        let routes = configure_routes().with_state(auth_state);
        Some(PluginRoutes { router: routes })
    }

    fn openapi_schema(&self) -> Option<OpenApi> {
        Some(AuthApiDoc::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_plugin_name() {
        let auth_plugin = AuthPlugin::new();
        assert_eq!(auth_plugin.name(), "auth");
    }
}
