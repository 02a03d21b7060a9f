/// Guard a handler body on a permission derived from the caller's role.
///
/// Usage in handler:
/// ```ignore
/// pub async fn get_page_view_stats(
///     RequireAuth(auth): RequireAuth,
///     State(state): State<Arc<AppState>>,
/// ) -> Result<impl IntoResponse, Problem> {
///     permission_guard!(auth, AnalyticsRead);
///     // Handler logic here
/// }
/// ```
#[macro_export]
macro_rules! permission_guard {
    ($auth:expr, $permission:ident) => {
        if !$auth.has_permission(&$crate::permissions::Permission::$permission) {
            return Err(clubhouse_core::error_builder::ErrorBuilder::new(
                ::axum::http::StatusCode::FORBIDDEN,
            )
            .type_("https://clubhouse.dev/probs/insufficient-permissions")
            .title("Insufficient Permissions")
            .detail(format!(
                "This operation requires the {} permission",
                $crate::permissions::Permission::$permission.to_string()
            ))
            .value(
                "required_permission",
                $crate::permissions::Permission::$permission.to_string(),
            )
            .value("user_role", $auth.effective_role.to_string())
            .build());
        }
    };
}
