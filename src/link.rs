//! Link URL building.
//!
//! A [`Link`] is a path that may contain `{name}` placeholders plus a set of
//! named parameters. Parameters that fill a placeholder become path segments;
//! all others are appended as a query string, in key order:
//!
//! | path                  | params                         | result                         |
//! |-----------------------|--------------------------------|--------------------------------|
//! | `/hello`              |                                | `/hello`                       |
//! | `hello`               |                                | `hello`                        |
//! | `/hello`              | `param1=data1`, `param2=data2` | `/hello?param1=data1&param2=data2` |
//! | `/hello/{param1}/{param2}` | `param1=data1`, `param2=data2` | `/hello/data1/data2`     |
//! | `/hello/{param1}`     | `param1=data1`, `param2=data2` | `/hello/data1?param2=data2`    |

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::Error;

/// Characters escaped when a value is substituted into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'#').add(b'%').add(b'&').add(b'\'').add(b'/')
    .add(b'<').add(b'>').add(b'?').add(b'`').add(b'{').add(b'}');

/// Characters escaped in query parameter names and values.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'#').add(b'%').add(b'&').add(b'\'').add(b'+')
    .add(b'<').add(b'=').add(b'>').add(b'`');

#[derive(Debug, Clone)]
pub struct Link<'a> {
    path: &'a str,
    params: BTreeMap<String, String>,
}

impl<'a> Link<'a> {
    pub fn new(path: &'a str) -> Self {
        Link { path, params: BTreeMap::new() }
    }

    /// Adds (or replaces) the parameter `name`.
    pub fn param<N, V>(mut self, name: N, value: V) -> Self
        where N: Into<String>, V: Into<String>
    {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Substitutes path variables and appends the remaining parameters as a
    /// query string.
    pub fn build(&self) -> Result<String, Error> {
        let mut url = String::with_capacity(self.path.len());
        let mut bound = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            url.push_str(&rest[..start]);
            let end = rest[start..].find('}')
                .map(|i| start + i)
                .ok_or_else(|| Error::UnclosedPlaceholder(self.path.to_string()))?;

            let name = rest[start + 1..end].trim();
            let value = self.params.get(name)
                .ok_or_else(|| Error::UnboundPlaceholder(name.to_string()))?;

            url.extend(utf8_percent_encode(value, SEGMENT));
            bound.push(name);
            rest = &rest[end + 1..];
        }

        url.push_str(rest);

        let mut separator = if url.contains('?') { '&' } else { '?' };
        for (name, value) in &self.params {
            if bound.contains(&name.as_str()) {
                continue;
            }

            url.push(separator);
            url.extend(utf8_percent_encode(name, QUERY));
            url.push('=');
            url.extend(utf8_percent_encode(value, QUERY));
            separator = '&';
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(path: &str) -> Link<'_> {
        Link::new(path).param("param1", "data1").param("param2", "data2")
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(Link::new("/hello").build().unwrap(), "/hello");
        assert_eq!(Link::new("hello").build().unwrap(), "hello");
    }

    #[test]
    fn unbound_params_become_the_query() {
        assert_eq!(params("/hello").build().unwrap(), "/hello?param1=data1&param2=data2");
    }

    #[test]
    fn placeholders_become_path_segments() {
        assert_eq!(params("/hello/{param1}/{param2}").build().unwrap(), "/hello/data1/data2");
        assert_eq!(params("/hello/{param1}").build().unwrap(), "/hello/data1?param2=data2");
    }

    #[test]
    fn query_is_ordered_by_name() {
        let link = Link::new("/q").param("b", "2").param("a", "1").param("c", "3");
        assert_eq!(link.build().unwrap(), "/q?a=1&b=2&c=3");
    }

    #[test]
    fn existing_query_is_extended() {
        let link = Link::new("/q?x=0").param("a", "1");
        assert_eq!(link.build().unwrap(), "/q?x=0&a=1");
    }

    #[test]
    fn values_are_percent_encoded() {
        let link = Link::new("/users/{name}")
            .param("name", "a b/c")
            .param("q", "x&y=z");

        assert_eq!(link.build().unwrap(), "/users/a%20b%2Fc?q=x%26y%3Dz");
    }

    #[test]
    fn placeholder_errors() {
        assert_eq!(
            Link::new("/hello/{param1").build(),
            Err(Error::UnclosedPlaceholder("/hello/{param1".into()))
        );

        assert_eq!(
            Link::new("/hello/{missing}").param("param1", "data1").build(),
            Err(Error::UnboundPlaceholder("missing".into()))
        );
    }
}
