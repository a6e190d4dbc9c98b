//! Owned views of the per-request objects a page may want to show.
//!
//! Templates never see Rocket's request, response or configuration directly.
//! A handler that wants them asks for the [`BasicObjects`] guard and copies
//! the views into its view model by hand.

use std::collections::BTreeMap;
use std::convert::Infallible;

use rocket::http::{ContentType, Status};
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use serde::Serialize;

use crate::config::AppConfig;

const DEFAULT_LOCALE: &str = "en";

/// What a template may know about the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestView {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub params: BTreeMap<String, String>,
    pub locale: String,
    pub host: Option<String>,
    pub remote: Option<String>,
}

/// What a template may know about the response it is rendered into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseView {
    pub status: u16,
    pub content_type: String,
}

/// What a template may know about the running server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerContextView {
    pub app_name: String,
    pub address: String,
    pub port: u16,
    pub profile: String,
    pub template_dir: String,
}

/// Request guard that adapts Rocket's request into the three views.
#[derive(Debug, Clone)]
pub struct BasicObjects {
    pub request: RequestView,
    pub response: ResponseView,
    pub server: ServerContextView,
}

/// The primary language tag of an `Accept-Language` header value.
fn primary_locale(accept_language: &str) -> Option<&str> {
    accept_language.split(',')
        .next()
        .and_then(|tag| tag.split(';').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty() && *tag != "*")
}

impl RequestView {
    fn from_request(req: &Request<'_>) -> Self {
        let params = req.query_fields()
            .map(|field| (field.name.source().as_str().to_string(), field.value.to_string()))
            .collect();

        let locale = req.headers().get_one("Accept-Language")
            .and_then(primary_locale)
            .unwrap_or(DEFAULT_LOCALE)
            .to_string();

        RequestView {
            method: req.method().as_str().to_string(),
            path: req.uri().path().as_str().to_string(),
            query: req.uri().query().map(|q| q.as_str().to_string()),
            params,
            locale,
            host: req.host().map(|host| host.to_string()),
            remote: req.remote().map(|addr| addr.to_string()),
        }
    }
}

impl ServerContextView {
    fn from_request(req: &Request<'_>) -> Self {
        let rocket = req.rocket();
        let config = rocket.config();
        let app_name = rocket.state::<AppConfig>()
            .map(|app| app.app_name.clone())
            .unwrap_or_else(|| AppConfig::default().app_name);

        let template_dir = rocket.figment()
            .extract_inner::<String>("template_dir")
            .unwrap_or_else(|_| "templates".into());

        ServerContextView {
            app_name,
            address: config.address.to_string(),
            port: config.port,
            profile: config.profile.to_string(),
            template_dir,
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for BasicObjects {
    type Error = Infallible;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Infallible> {
        Outcome::Success(BasicObjects {
            request: RequestView::from_request(req),
            response: ResponseView {
                status: Status::Ok.code,
                content_type: ContentType::HTML.to_string(),
            },
            server: ServerContextView::from_request(req),
        })
    }
}
