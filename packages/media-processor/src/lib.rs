pub mod config;
pub mod handler;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use media_core::ImageService;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ImageService>,
}

impl AppState {
    pub fn new(service: ImageService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// ルーターを組み立てる
///
/// `static_dir` があればどのルートにも一致しないパスをそこから配信する
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(handler::health))
        .route("/api/images", get(handler::get_image))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http())
}
