use utoipa::openapi::security::Http;
use utoipa::openapi::security::HttpAuthScheme;
use utoipa::openapi::security::HttpBuilder;
use utoipa::openapi::security::SecurityScheme;
use utoipa::Modify;
use utoipa::OpenApi;

use super::handlers::documentation;
use super::handlers::login_basic;
use super::handlers::login_for_access_token;
use super::handlers::login_for_access_token::LoginForm;
use super::handlers::login_for_access_token::TokenResponse;
use super::handlers::logout;
use super::handlers::read_users_me;
use super::handlers::read_users_me::UserResponse;
use super::handlers::root;
use super::handlers::root::ServiceStatus;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        login_for_access_token::login_for_access_token,
        login_basic::login_basic,
        logout::logout,
        read_users_me::read_users_me,
        documentation::get_documentation,
        documentation::get_openapi,
    ),
    components(schemas(LoginForm, TokenResponse, UserResponse, ServiceStatus)),
    modifiers(&SecurityAddon),
    tags(
        (name = "service", description = "Service status"),
        (name = "authentication", description = "Login and logout"),
        (name = "users", description = "Current user"),
        (name = "documentation", description = "API documentation"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "basic",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)),
            );
        }
    }
}
