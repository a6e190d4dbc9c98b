//! Server-side templating basics.
//!
//! Every page is a handler that fills a view model and names a template under
//! `templates/`. The routes under `/basic` exercise expressions, escaping,
//! iteration, conditionals, comments, links and script inlining; the routes
//! under `/template` exercise fragments and layouts.

#[macro_use] extern crate rocket;


mod basic;
mod config;
mod engine;
mod error;
mod inline;
mod layouts;
mod link;
mod objects;
mod services;
mod session;
mod temporal;
mod user;

use rocket::Request;
use rocket::fairing::AdHoc;
use rocket_dyn_templates::{Template, context};

use crate::config::AppConfig;

#[get("/")]
fn index() -> Template {
    Template::render("index", context! {})
}

#[catch(404)]
fn not_found(req: &Request<'_>) -> Template {
    Template::render("error/404", context! { path: req.uri().path().as_str() })
}

#[launch]
fn rocket() -> _ {
    rocket::build()
        .mount("/", routes![index])
        .mount("/basic", basic::routes())
        .mount("/template", layouts::routes())
        .register("/", catchers![not_found])
        .attach(AdHoc::config::<AppConfig>())
        .attach(session::fairing())
        .attach(engine::fairing())
}
