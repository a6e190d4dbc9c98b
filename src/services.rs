//! Named, stateless services that templates may call.
//!
//! Each service is a function from a string to a string registered under a
//! name. [`ServiceRegistry::install()`] exposes every entry to the template
//! engine as a function of one `data` argument, so a registry holding
//! `"hello"` can be used from a template as `{{ hello(data="Spring!") }}`.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use rocket_dyn_templates::tera::{self, Tera, Value};

use crate::error::Error;

/// Prepends a fixed greeting to its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingService {
    prefix: String,
}

impl GreetingService {
    pub fn new(prefix: impl Into<String>) -> Self {
        GreetingService { prefix: prefix.into() }
    }

    pub fn hello(&self, data: &str) -> String {
        format!("{}{}", self.prefix, data)
    }
}

impl Default for GreetingService {
    fn default() -> Self {
        GreetingService::new("Hello ")
    }
}

type Service = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A name to function map of template services.
#[derive(Clone, Default)]
pub struct ServiceRegistry {
    services: BTreeMap<String, Service>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        ServiceRegistry::default()
    }

    /// The registry every page is rendered with: `hello` backed by
    /// `greeting`.
    pub fn standard(greeting: GreetingService) -> Self {
        ServiceRegistry::new().register("hello", move |data| greeting.hello(data))
    }

    /// Registers `service` under `name`, replacing any previous entry.
    pub fn register<F>(mut self, name: impl Into<String>, service: F) -> Self
        where F: Fn(&str) -> String + Send + Sync + 'static
    {
        self.services.insert(name.into(), Arc::new(service));
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.services.keys().map(|name| name.as_str())
    }

    pub fn call(&self, name: &str, input: &str) -> Option<String> {
        self.services.get(name).map(|service| service(input))
    }

    /// Registers every service as a template function taking `data`.
    pub fn install(&self, tera: &mut Tera) {
        for name in self.services.keys() {
            let (registry, service) = (self.clone(), name.clone());
            tera.register_function(name, move |args: &HashMap<String, Value>| -> tera::Result<Value> {
                let data = match args.get("data") {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::Bool(b)) => b.to_string(),
                    Some(_) => return Err(Error::InvalidArgument {
                        name: "data".into(),
                        expected: "a string, number or boolean",
                    }.into()),
                    None => return Err(Error::MissingArgument("data").into()),
                };

                registry.call(&service, &data)
                    .map(Value::String)
                    .ok_or_else(|| tera::Error::msg(format!("unknown service `{}`", service)))
            });
        }
    }
}
