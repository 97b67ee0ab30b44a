// Classification of anchor clicks for the transition sequencer.

/// What the click interceptor could read off a clicked anchor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkClick {
    pub href: Option<String>,
    pub target: Option<String>,
    pub download: bool,
    /// Ctrl/Meta/Shift/Alt held or a non-primary button.
    pub modified: bool,
}

impl LinkClick {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn to(href: &str) -> Self {
        Self {
            href: Some(href.to_string()),
            ..Self::default()
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkKind {
    /// Same-document navigation to be played behind the wipe.
    Internal(String),
    /// Absolute URL, other scheme, new browsing context or download.
    External,
    /// Same path as the current page, or a fragment-only link.
    SamePage,
    /// Anchor without an href.
    Missing,
}

impl LinkKind {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_intercepted(&self) -> bool {
        matches!(self, LinkKind::Internal(_))
    }
}

pub fn classify(click: &LinkClick, current_path: &str) -> LinkKind {
    let href = match click.href.as_deref().map(str::trim) {
        Some(h) if !h.is_empty() => h,
        _ => return LinkKind::Missing,
    };
    let new_context = click
        .target
        .as_deref()
        .map(|t| !t.is_empty() && !t.eq_ignore_ascii_case("_self"))
        .unwrap_or(false);
    if new_context || click.download || click.modified || is_absolute(href) {
        return LinkKind::External;
    }
    let path = href.split('#').next().unwrap_or_default();
    if path.is_empty() || normalize(path) == normalize(current_path) {
        return LinkKind::SamePage;
    }
    LinkKind::Internal(href.to_string())
}

/// Absolute URLs: protocol-relative `//host` or any `scheme:` prefix.
pub fn is_absolute(href: &str) -> bool {
    if href.starts_with("//") {
        return true;
    }
    match href.find(':') {
        Some(i) => {
            let scheme = &href[..i];
            let first_ok = scheme
                .chars()
                .next()
                .map(|c| c.is_ascii_alphabetic())
                .unwrap_or(false);
            first_ok
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}
