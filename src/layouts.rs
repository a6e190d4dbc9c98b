//! Pages composed from fragments and layouts. Mounted at `/template`.
//!
//! None of these handlers supply data: composition happens entirely in the
//! templates.
//!
//!   * `fragment`: imports macros from `template/fragment/footer`, with and
//!     without arguments, and includes another template whole.
//!   * `layout`: the page calls `common_header()` from
//!     `template/layout/base`, handing it the page's title and links.
//!   * `layoutExtend`: the page `extends` `template/layoutExtend/layoutFile`
//!     and only fills in its blocks.

use rocket_dyn_templates::{Template, context};

#[get("/fragment")]
fn fragment() -> Template {
    Template::render("template/fragment/fragmentMain", context! {})
}

#[get("/layout")]
fn layout() -> Template {
    Template::render("template/layout/layoutMain", context! {})
}

#[get("/layoutExtend")]
fn layout_extend() -> Template {
    Template::render("template/layoutExtend/layoutExtendMain", context! {})
}

pub fn routes() -> Vec<rocket::Route> {
    routes![fragment, layout, layout_extend]
}
