//! Askama template definitions.

use askama::Template;

/// Rendered page view.
#[derive(Template)]
#[template(path = "view.html")]
pub struct ViewTemplate {
    pub title: String,

    /// Body with wiki links already expanded into anchor markup, so the
    /// template emits it unescaped.
    pub body: String,
}

/// Edit form, pre-filled with the current body (blank for a new page).
#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub title: String,
    pub body: String,
}

/// Front page listing every stored title.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub titles: Vec<String>,
}
