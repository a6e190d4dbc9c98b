//! Serialization of model values into `<script>` bodies.

use serde::Serialize;

use crate::error::Error;

/// Serializes `value` as a JavaScript literal that is safe to place inside a
/// `<script>` element.
///
/// The literal is plain JSON in which `<`, `>`, `&`, `'`, U+2028 and U+2029
/// are written as `\uXXXX` escapes. JSON only emits those characters inside
/// string literals, so the escapes never change the value, but they keep a
/// payload like `</script>` or `it's` from closing the enclosing element or a
/// surrounding string.
pub fn to_script_literal<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    let json = serde_json::to_string(value).map_err(|e| Error::Serialize(e.to_string()))?;

    let mut literal = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => literal.push_str("\\u003c"),
            '>' => literal.push_str("\\u003e"),
            '&' => literal.push_str("\\u0026"),
            '\'' => literal.push_str("\\u0027"),
            '\u{2028}' => literal.push_str("\\u2028"),
            '\u{2029}' => literal.push_str("\\u2029"),
            c => literal.push(c),
        }
    }

    Ok(literal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::user::User;

    #[test]
    fn scalars_keep_their_type() {
        assert_eq!(to_script_literal("userA").unwrap(), r#""userA""#);
        assert_eq!(to_script_literal(&10).unwrap(), "10");
        assert_eq!(to_script_literal(&true).unwrap(), "true");
        assert_eq!(to_script_literal(&None::<u8>).unwrap(), "null");
    }

    #[test]
    fn records_and_lists_become_literals() {
        let user = User::new("userA", 10);
        assert_eq!(to_script_literal(&user).unwrap(), r#"{"username":"userA","age":10}"#);

        let users = vec![User::new("userA", 10), User::new("userB", 20)];
        assert_eq!(
            to_script_literal(&users).unwrap(),
            r#"[{"username":"userA","age":10},{"username":"userB","age":20}]"#
        );
    }

    #[test]
    fn markup_and_quotes_are_escaped() {
        let literal = to_script_literal("it's </script><b>&").unwrap();
        assert_eq!(literal, r#""it\u0027s \u003c/script\u003e\u003cb\u003e\u0026""#);
        assert!(!literal.contains("</script"));
        assert!(!literal.contains('\''));

        let parsed: String = serde_json::from_str(&literal).unwrap();
        assert_eq!(parsed, "it's </script><b>&");
    }

    #[test]
    fn line_separators_are_escaped() {
        let literal = to_script_literal("a\u{2028}b\u{2029}c").unwrap();
        assert_eq!(literal, r#""a\u2028b\u2029c""#);
    }
}
