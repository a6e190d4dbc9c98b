//! Pages exercising expressions, escaping, iteration, conditionals, comments,
//! blocks and script inlining. Mounted at `/basic`.

use std::collections::BTreeMap;

use rocket_dyn_templates::{Template, context};
use serde::Serialize;

use crate::objects::{BasicObjects, RequestView, ResponseView, ServerContextView};
use crate::session::Session;
use crate::temporal::LocalDateTime;
use crate::user::{self, User};

#[get("/text-basic")]
fn text_basic() -> Template {
    Template::render("basic/text-basic", context! { data: "hello-spring" })
}

/// `{{ data }}` escapes the markup in `data`; `{{ data | safe }}` doesn't.
#[get("/text-unescaped")]
fn text_unescaped() -> Template {
    Template::render("basic/text-unescaped", context! { data: "Hello <b>Spring!</b>" })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VariableModel {
    user: User,
    users: Vec<User>,
    user_map: BTreeMap<String, User>,
}

/// Property, index and key access on a record, a list and a map.
#[get("/variable")]
fn variable() -> Template {
    let user_a = User::new("userA", 10);
    let user_b = User::new("userB", 10);

    let users = vec![user_a.clone(), user_b.clone()];
    let user_map = users.iter()
        .map(|user| (user.username().to_string(), user.clone()))
        .collect();

    Template::render("basic/variable", VariableModel { user: user_a, users, user_map })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BasicObjectsModel {
    request: RequestView,
    response: ResponseView,
    servlet_context: ServerContextView,
}

/// Request, response and server context are only visible to the template
/// because they are copied into the model here.
#[get("/basic-objects")]
fn basic_objects(objects: BasicObjects, session: Session<'_>) -> Template {
    session.set("sessionData", "Hello Session");
    log::debug!("session {}: stored sessionData", session.id());

    Template::render("basic/basic-objects", BasicObjectsModel {
        request: objects.request,
        response: objects.response,
        servlet_context: objects.server,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DateModel {
    local_date_time: LocalDateTime,
}

#[get("/date")]
fn date() -> Template {
    Template::render("basic/date", DateModel { local_date_time: LocalDateTime::now() })
}

/// Values substituted into query strings and path variables by `url()`.
#[get("/link")]
fn link() -> Template {
    Template::render("basic/link", context! { param1: "data1", param2: "data2" })
}

#[get("/literal")]
fn literal() -> Template {
    Template::render("basic/literal", context! { data: "'Spring !'" })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OperationModel {
    null_data: Option<String>,
    data: &'static str,
}

/// Comparisons, conditionals and defaults over a null and a non-null value.
#[get("/operation")]
fn operation() -> Template {
    Template::render("basic/operation", OperationModel { null_data: None, data: "Spring!" })
}

#[get("/attribute")]
fn attribute() -> Template {
    Template::render("basic/attribute", context! {})
}

/// Iteration with loop status: index, count, size, parity, first and last.
#[get("/each")]
fn each() -> Template {
    Template::render("basic/each", context! { users: user::users() })
}

#[get("/condition")]
fn condition() -> Template {
    Template::render("basic/condition", context! { users: user::users() })
}

#[get("/comments")]
fn comments() -> Template {
    Template::render("basic/comments", context! { data: "Spring!" })
}

#[get("/block")]
fn block() -> Template {
    Template::render("basic/block", context! { users: user::users() })
}

#[get("/javascript")]
fn javascript() -> Template {
    Template::render("basic/javascript", context! {
        user: User::new("userA", 10),
        users: user::users(),
    })
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        text_basic, text_unescaped, variable, basic_objects, date, link, literal,
        operation, attribute, each, condition, comments, block, javascript,
    ]
}
