use std::fmt;

use serde::Serialize;

/// A user as shown by the demo pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct User {
    username: String,
    age: u32,
}

impl User {
    pub fn new(username: impl Into<String>, age: u32) -> Self {
        User { username: username.into(), age }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(username={}, age={})", self.username, self.age)
    }
}

/// The three users iterated over by the `each`, `condition`, `block` and
/// `javascript` pages, aged 10, 20 and 30.
pub fn users() -> Vec<User> {
    vec![
        User::new("userA", 10),
        User::new("userB", 20),
        User::new("userC", 30),
    ]
}
