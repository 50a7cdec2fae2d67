//! URL matching for the page routes.
//!
//! The three page routes share one anchored pattern:
//! `^/(edit|save|view)/(\w+)$`. Anything else, whether an unknown verb, an
//! empty or non-word title, or extra path segments, is no match; the HTTP
//! layer reports that as 404.

use once_cell::sync::Lazy;
use regex::Regex;

static VALID_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(edit|save|view)/(\w+)$").expect("valid route regex"));

/// A page operation named by the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteVerb {
    View,
    Edit,
    Save,
}

impl RouteVerb {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "view" => Some(RouteVerb::View),
            "edit" => Some(RouteVerb::Edit),
            "save" => Some(RouteVerb::Save),
            _ => None,
        }
    }
}

/// A validated page route: the verb plus the title it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub verb: RouteVerb,
    pub title: String,
}

/// Match `path` against the page route pattern.
pub fn match_path(path: &str) -> Option<RouteMatch> {
    let caps = VALID_PATH.captures(path)?;
    let verb = RouteVerb::from_str(&caps[1])?;
    Some(RouteMatch {
        verb,
        title: caps[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_three_verbs() {
        assert_eq!(
            match_path("/view/Abc"),
            Some(RouteMatch {
                verb: RouteVerb::View,
                title: "Abc".to_string(),
            })
        );
        assert_eq!(match_path("/edit/Abc").unwrap().verb, RouteVerb::Edit);
        assert_eq!(match_path("/save/Abc").unwrap().verb, RouteVerb::Save);
    }

    #[test]
    fn titles_are_word_characters() {
        assert_eq!(match_path("/view/under_score_9").unwrap().title, "under_score_9");
        assert_eq!(match_path("/view/Bad-Title"), None);
        assert_eq!(match_path("/view/sp ace"), None);
    }

    #[test]
    fn rejects_unknown_verbs() {
        assert_eq!(match_path("/delete/Abc"), None);
        assert_eq!(match_path("/viewer/Abc"), None);
    }

    #[test]
    fn rejects_empty_titles_and_extra_segments() {
        assert_eq!(match_path("/view/"), None);
        assert_eq!(match_path("/view/Abc/extra"), None);
        assert_eq!(match_path("/view"), None);
        assert_eq!(match_path("/"), None);
    }
}
