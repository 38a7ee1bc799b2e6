use std::{convert::Infallible, sync::Arc, time::Duration};

use axum::{
    extract::Extension,
    http::StatusCode,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
};
use tokio_stream::{StreamExt, wrappers::BroadcastStream};

use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Page-cache invalidation notices as server-sent events.
///
/// The rendering layer subscribes and drops its cached pages/tags as notices
/// arrive. The channel is lossy; a reconnecting subscriber just starts fresh.
pub async fn events(
    Extension(services): Extension<Arc<AppServices>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = services.subscribe_invalidations();

    let stream = BroadcastStream::new(rx).filter_map(|msg| match msg {
        Ok(invalidation) => {
            let data =
                serde_json::to_string(&invalidation).unwrap_or_else(|_| "{}".to_string());
            Some(Ok(SseEvent::default().event("cache.invalidated").data(data)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15)))
}
