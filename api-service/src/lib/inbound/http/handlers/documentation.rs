use axum::response::Html;
use axum::Extension;
use axum::Json;
use utoipa::OpenApi;

use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::openapi::ApiDoc;

pub const OPENAPI_URL: &str = "/openapi.json";

const DOCS_TITLE: &str = "docs";

const SWAGGER_UI_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<link type="text/css" rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
<title>{title}</title>
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
const ui = SwaggerUIBundle({
    url: '{openapi_url}',
    dom_id: '#swagger-ui',
    layout: 'BaseLayout',
    deepLinking: true,
    showExtensions: true,
    showCommonExtensions: true,
    presets: [
        SwaggerUIBundle.presets.apis,
        SwaggerUIBundle.SwaggerUIStandalonePreset
    ],
})
</script>
</body>
</html>
"#;

fn swagger_ui_html(openapi_url: &str, title: &str) -> String {
    SWAGGER_UI_TEMPLATE
        .replace("{title}", title)
        .replace("{openapi_url}", openapi_url)
}

/// Interactive API documentation, available to authenticated users only.
#[utoipa::path(
    get,
    path = "/docs",
    tag = "documentation",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Swagger UI page", content_type = "text/html", body = String),
        (status = 401, description = "Missing, invalid or expired token"),
    )
)]
pub async fn get_documentation(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Html<String> {
    tracing::debug!(username = %user.username, "Serving documentation");
    Html(swagger_ui_html(OPENAPI_URL, DOCS_TITLE))
}

#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "documentation",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "OpenAPI document", content_type = "application/json"),
        (status = 401, description = "Missing, invalid or expired token"),
    )
)]
pub async fn get_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
