//! Page model.

/// A single wiki page.
///
/// The title is the page's identity: it doubles as the storage key and the
/// URL segment, and the route matcher restricts it to word characters.
/// There is no secondary metadata; the body is the whole record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: String,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// A blank page for the given title, used when editing a page that
    /// does not exist yet.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
        }
    }
}
