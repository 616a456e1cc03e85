//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServiceSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use user_directory::Trace;
#[cfg(debug_assertions)]
use user_directory::doc::ApiDoc;
use user_directory::domain::UserDirectoryService;
use user_directory::inbound::http::health::{HealthState, live, ready};
use user_directory::inbound::http::state::HttpState;
use user_directory::inbound::http::users;
use user_directory::inbound::http::validation::{json_config, path_config};
use user_directory::outbound::persistence::{DbPool, DieselUserRepository};

fn build_http_state(pool: DbPool) -> web::Data<HttpState> {
    let repository = Arc::new(DieselUserRepository::new(pool));
    let service = Arc::new(UserDirectoryService::new(repository));
    web::Data::new(HttpState::from_service(service))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .configure(users::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the HTTP server and mark the service ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let bind_addr = config.bind_addr();
    let http_state = build_http_state(config.db_pool);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    info!(%bind_addr, "user directory listening");
    Ok(server)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use async_trait::async_trait;
    use rstest::rstest;

    use user_directory::domain::ports::{Created, UsersCommand, UsersQuery};
    use user_directory::domain::{Error, RowsAffected, TRACE_ID_HEADER, User, UserDraft, UserId};

    use super::*;

    struct EmptyDirectory;

    #[async_trait]
    impl UsersQuery for EmptyDirectory {
        async fn list_users(&self) -> Result<Vec<User>, Error> {
            Ok(Vec::new())
        }

        async fn find_user(&self, _id: UserId) -> Result<Option<User>, Error> {
            Ok(None)
        }
    }

    #[async_trait]
    impl UsersCommand for EmptyDirectory {
        async fn create_user(&self, _draft: UserDraft) -> Result<Created, Error> {
            Ok(Created {
                rows: RowsAffected::NONE,
                user: None,
            })
        }

        async fn update_user(&self, _user: User) -> Result<RowsAffected, Error> {
            Ok(RowsAffected::NONE)
        }

        async fn delete_user(&self, _id: UserId) -> Result<RowsAffected, Error> {
            Ok(RowsAffected::NONE)
        }
    }

    fn test_app() -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let state = web::Data::new(HttpState::from_service(Arc::new(EmptyDirectory)));
        build_app(health, state)
    }

    #[rstest]
    #[case("/users", StatusCode::OK)]
    #[case("/users/1", StatusCode::NOT_FOUND)]
    #[case("/users/abc", StatusCode::BAD_REQUEST)]
    #[case("/health/ready", StatusCode::OK)]
    #[case("/health/live", StatusCode::OK)]
    #[actix_web::test]
    async fn routes_are_wired(#[case] uri: &str, #[case] expected: StatusCode) {
        let app = actix_test::init_service(test_app()).await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(response.status(), expected);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
    }

    #[cfg(debug_assertions)]
    #[actix_web::test]
    async fn openapi_document_is_served() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api-docs/openapi.json")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert!(body["paths"]["/users/{id}"].is_object());
    }
}
