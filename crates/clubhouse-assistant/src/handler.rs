use crate::service::{AssistantError, AssistantService};
use crate::types::{ChatMessage, ChatRequest, ChatRole};
use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use clubhouse_core::error_builder::{bad_gateway, bad_request};
use clubhouse_core::problemdetails::Problem;
use futures::{Stream, StreamExt};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::error;
use utoipa::OpenApi;

pub struct AppState {
    pub assistant_service: Arc<AssistantService>,
}

#[derive(OpenApi)]
#[openapi(
    paths(chat),
    components(schemas(ChatRequest, ChatMessage, ChatRole)),
    tags(
        (name = "Assistant", description = "AI chat assistant")
    )
)]
pub struct AssistantApiDoc;

pub fn configure_routes() -> Router<Arc<AppState>> {
    Router::new().route("/assistant/chat", post(chat))
}

/// Stream the assistant's reply as server-sent events.
///
/// Each event carries one text chunk of the reply; the stream ends when
/// the model is done. Errors mid-stream are sent as `error` events since
/// the response status has already been committed.
#[utoipa::path(
    tag = "Assistant",
    post,
    path = "/assistant/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "SSE stream of reply chunks"),
        (status = 400, description = "Empty conversation or bad message roles"),
        (status = 502, description = "Language model provider failed")
    )
)]
pub async fn chat(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<impl IntoResponse, Problem> {
    let stream = match app_state
        .assistant_service
        .chat_stream(request.messages)
        .await
    {
        Ok(stream) => stream,
        Err(AssistantError::InvalidInput(msg)) => {
            return Err(bad_request().detail(msg).build());
        }
        Err(e) => {
            error!("Assistant request failed: {}", e);
            return Err(bad_gateway()
                .detail("The assistant is currently unavailable")
                .build());
        }
    };

    Ok(Sse::new(into_sse_events(stream)).keep_alive(KeepAlive::default()))
}

fn into_sse_events(
    stream: impl Stream<Item = Result<String, AssistantError>>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    stream.map(|chunk| match chunk {
        Ok(text) => Ok(Event::default().data(text)),
        Err(e) => {
            error!("Assistant stream failed: {}", e);
            Ok(Event::default().event("error").data("stream interrupted"))
        }
    })
}
