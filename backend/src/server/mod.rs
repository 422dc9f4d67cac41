//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_session::{
    SessionMiddleware,
    config::{CookieContentSecurity, PersistentSession},
    storage::CookieSessionStore,
};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{App, HttpServer, web};

use contacts::Trace;
#[cfg(debug_assertions)]
use contacts::doc::ApiDoc;
use contacts::inbound::http::avatars::{download_avatar, upload_avatar};
use contacts::inbound::http::contacts::{
    create_contact, delete_contact, get_contact, list_contacts, update_contact,
};
use contacts::inbound::http::error::json_error_handler;
use contacts::inbound::http::health::{HealthState, live, ready};
use contacts::inbound::http::session_config::SESSION_COOKIE_NAME;
use contacts::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(SameSite::Lax)
        .session_lifecycle(
            PersistentSession::default().session_ttl(actix_web::cookie::time::Duration::hours(2)),
        )
        .build();

    let contacts = web::scope("/contacts")
        .service(list_contacts)
        .service(create_contact)
        .service(get_contact)
        .service(update_contact)
        .service(delete_contact)
        .service(upload_avatar)
        .service(download_avatar);

    let api = web::scope("/api").wrap(session).service(contacts);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(NormalizePath::new(TrailingSlash::Trim))
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the listener is bound.
/// - `config`: pre-built [`ServerConfig`] with session, binding and adapter settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        session,
        bind_addr,
        db_pool: _,
        storage: _,
    } = config;
    let key = session.key;
    let cookie_secure = session.cookie_secure;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! End-to-end checks of the assembled application.

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use contacts::domain::TRACE_ID_HEADER;
    use contacts::inbound::http::session_config::{KeySource, SessionSettings};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn config() -> ServerConfig {
        ServerConfig::new(
            SessionSettings {
                key: Key::generate(),
                cookie_secure: false,
                key_source: KeySource::Ephemeral,
            },
            "127.0.0.1",
            0,
        )
    }

    fn deps(config: &ServerConfig) -> AppDependencies {
        let health_state = web::Data::new(HealthState::new(config.health_report()));
        health_state.mark_ready();
        AppDependencies {
            health_state,
            http_state: build_http_state(config),
            key: config.session.key.clone(),
            cookie_secure: config.session.cookie_secure,
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn contacts_round_trip_through_the_full_stack() {
        let app = actix_test::init_service(build_app(deps(&config()))).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/contacts/")
                .set_json(json!({"name": "Anna Nowak", "phone": "+48123456789"}))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        assert!(created.headers().contains_key(TRACE_ID_HEADER));
        let created: Value = actix_test::read_body_json(created).await;

        let listed = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/contacts")
                .to_request(),
        )
        .await;
        assert_eq!(listed.status(), StatusCode::OK);
        let listed: Value = actix_test::read_body_json(listed).await;
        assert_eq!(listed, json!([created]));
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_json_uses_the_error_envelope() {
        let app = actix_test::init_service(build_app(deps(&config()))).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/contacts")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
    }

    #[rstest]
    #[actix_web::test]
    async fn avatars_are_unavailable_without_storage() {
        let app = actix_test::init_service(build_app(deps(&config()))).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/contacts/1/avatar")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[rstest]
    #[actix_web::test]
    async fn readiness_reports_the_wired_adapters() {
        let app = actix_test::init_service(build_app(deps(&config()))).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/health/ready")
                .to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({"contacts": "in_memory", "avatars": "disabled"}));
    }
}
