use serde::Deserialize;

/// Application settings read from the same figment as Rocket's own
/// configuration: `Rocket.toml` and `ROCKET_*` environment variables.
///
/// ```toml
/// [default]
/// app_name = "template_basics"
/// greeting_prefix = "Hello "
/// session_cookie = "SESSIONID"
/// session_ttl = 1800
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name reported in the server context view.
    pub app_name: String,
    /// Prefix prepended by the `hello` template service.
    pub greeting_prefix: String,
    /// Name of the cookie carrying the session id.
    pub session_cookie: String,
    /// Seconds a session may stay idle before it is discarded.
    pub session_ttl: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            app_name: env!("CARGO_PKG_NAME").into(),
            greeting_prefix: "Hello ".into(),
            session_cookie: "SESSIONID".into(),
            session_ttl: 30 * 60,
        }
    }
}
