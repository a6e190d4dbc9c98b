//! Template engine customization.
//!
//! Tera is extended with what the demo pages use beyond its builtins:
//!
//!   * `url(path=..., ..)`: builds a link, see [`Link`].
//!   * `js`: renders a value as a script-safe literal, see
//!     [`to_script_literal()`].
//!   * `temporal(format=..)`: formats a serialized [`LocalDateTime`].
//!   * every entry of the [`ServiceRegistry`], callable by name.

use std::collections::HashMap;

use rocket::fairing::AdHoc;
use rocket_dyn_templates::Template;
use rocket_dyn_templates::tera::{self, Tera, Value};

use crate::config::AppConfig;
use crate::error::Error;
use crate::inline::to_script_literal;
use crate::link::Link;
use crate::services::{GreetingService, ServiceRegistry};
use crate::temporal::{LocalDateTime, DEFAULT_FORMAT};

/// Attaches the template fairing, customized with the services configured in
/// [`AppConfig`]. Must be attached after `AdHoc::config::<AppConfig>()`.
pub fn fairing() -> AdHoc {
    AdHoc::on_ignite("Templates", |rocket| async move {
        let config = rocket.state::<AppConfig>().cloned().unwrap_or_default();
        let services = ServiceRegistry::standard(GreetingService::new(config.greeting_prefix));
        for name in services.names() {
            log::info!("template service: {}", name);
        }

        rocket.attach(Template::custom(move |engines| {
            customize(&mut engines.tera, &services);
        }))
    })
}

pub fn customize(tera: &mut Tera, services: &ServiceRegistry) {
    tera.register_function("url", Url);
    tera.register_filter("js", js);
    tera.register_filter("temporal", temporal);
    services.install(tera);
}

/// Converts a scalar argument to its string form. `null` yields `None`.
fn scalar(name: &str, value: &Value) -> Result<Option<String>, Error> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(Error::InvalidArgument {
            name: name.into(),
            expected: "a string, number, boolean or null",
        }),
    }
}

/// The `url()` function. Its output is already percent-encoded, so it is
/// marked safe and lands in attributes without HTML escaping.
struct Url;

impl tera::Function for Url {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        let path = match args.get("path") {
            Some(Value::String(path)) => path,
            Some(_) => return Err(Error::InvalidArgument {
                name: "path".into(),
                expected: "a string",
            }.into()),
            None => return Err(Error::MissingArgument("path").into()),
        };

        let mut link = Link::new(path);
        for (name, value) in args.iter().filter(|(name, _)| *name != "path") {
            if let Some(value) = scalar(name, value)? {
                link = link.param(name.as_str(), value);
            }
        }

        Ok(Value::String(link.build()?))
    }

    fn is_safe(&self) -> bool {
        true
    }
}

fn js(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(to_script_literal(value)?))
}

fn temporal(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let input = value.as_str().ok_or_else(|| Error::InvalidArgument {
        name: "value".into(),
        expected: "a serialized date-time",
    })?;

    let format = match args.get("format") {
        Some(Value::String(format)) => format.as_str(),
        Some(_) => return Err(Error::InvalidArgument {
            name: "format".into(),
            expected: "a string",
        }.into()),
        None => DEFAULT_FORMAT,
    };

    Ok(Value::String(LocalDateTime::parse(input)?.format(format)?))
}
