// File: services/labbook_backend/src/main.rs
use axum::{routing::get, Router};
use labbook_config::load_config;
#[cfg(feature = "sheets")]
use labbook_sheets::routes as sheets_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

#[tokio::main]
async fn main() {
    labbook_common::logging::init();
    let config = Arc::new(load_config().expect("Failed to load config"));

    let api_router = Router::new().route("/", get(|| async { "Welcome to the Labbook API!" }));
    #[cfg(feature = "sheets")]
    let sheets_router = sheets_routes(config.clone());

    let api_router = Router::new().nest("/api", {
        #[allow(unused_mut)] // needs to be mutable when features are enabled
        let mut router = api_router;
        #[cfg(feature = "sheets")]
        {
            router = router.merge(sheets_router);
        }
        router
    });

    let mut app = api_router;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use labbook_sheets::doc::SheetsApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Labbook API",
                version = "0.1.0",
                description = "Lab booking grid service API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "labbook", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(SheetsApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve static files in dev mode
    if cfg!(debug_assertions) {
        info!("Running in development mode, serving static files from ../../dist");

        let static_router = Router::new().nest_service("/static", ServeDir::new("../../dist"));
        app = app.merge(static_router);

        app = app.fallback_service(ServeDir::new("../dist"));
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
