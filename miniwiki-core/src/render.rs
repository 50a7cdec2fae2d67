//! Wiki-link expansion.
//!
//! Page bodies may contain `[Word]` markers. Rendering rewrites every
//! marker into an anchor pointing at the view route for that word.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LINK_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(\w+)\]").expect("valid link marker regex"));

/// Replace every `[Word]` marker in `body` with a link to `/view/Word`.
///
/// Matches are resolved leftmost-first and never overlap. The captured
/// word goes into the markup as-is, without HTML escaping: the `\w+`
/// character class is the only thing keeping the output well-formed, so
/// bodies must only reach this after upstream title validation has held
/// the line. Input without markers is returned borrowed, untouched.
pub fn expand_links(body: &str) -> Cow<'_, str> {
    LINK_MARKER.replace_all(body, |caps: &Captures| {
        let title = &caps[1];
        format!("<a href='/view/{title}'>{title}</a>")
    })
}
