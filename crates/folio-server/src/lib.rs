pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> Router {
    let uploads = folio_core::paths::uploads_dir(&root);
    let app_state = state::AppState::new(root);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Public content
        .route("/api/view/landing", get(routes::view::landing))
        .route("/api/profile", get(routes::profile::get_profile))
        .route("/api/content/{kind}", get(routes::content::list_active))
        .route("/api/skills/grouped", get(routes::skills::grouped))
        .route("/api/contact", post(routes::contact::submit))
        // Admin content
        .route(
            "/api/admin/content/{kind}",
            get(routes::content::admin_list),
        )
        .route(
            "/api/admin/content/{kind}",
            post(routes::content::admin_create),
        )
        .route(
            "/api/admin/content/{kind}/{id}",
            put(routes::content::admin_update),
        )
        .route(
            "/api/admin/content/{kind}/{id}",
            delete(routes::content::admin_delete),
        )
        .route(
            "/api/admin/content/{kind}/{id}/active",
            post(routes::content::admin_set_active),
        )
        .route(
            "/api/admin/content/{kind}/{id}/order",
            put(routes::content::admin_set_order),
        )
        // Admin profile / inbox / uploads
        .route("/api/admin/profile", put(routes::profile::put_profile))
        .route("/api/admin/messages", get(routes::contact::admin_list))
        .route(
            "/api/admin/messages/{id}",
            delete(routes::contact::admin_delete),
        )
        .route("/api/admin/uploads/{bucket}", post(routes::uploads::upload))
        // Uploaded assets
        .nest_service("/uploads", ServeDir::new(uploads))
        // Upload bodies can exceed axum's 2MB default; the real cap is
        // enforced per-config in the upload helper.
        .layer(DefaultBodyLimit::max(64 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the folio API server.
pub async fn serve(root: PathBuf, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let app = build_router(root);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("folio API listening on http://localhost:{port}");

    if open_browser {
        let url = format!("http://localhost:{port}/api/view/landing");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

/// Start the server on a pre-bound listener, so the caller can read the
/// actual port first (useful when `port = 0` and the OS picks one).
pub async fn serve_on(
    root: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root);

    tracing::info!("folio API listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}/api/view/landing");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
