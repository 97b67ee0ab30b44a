// Locale prefix routing. Every page lives under `/fr/...` or `/en/...`;
// unprefixed paths are redirected to the negotiated locale.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

pub const LOCALES: [Locale; 2] = [Locale::Fr, Locale::En];

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        LOCALES
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }

    /// Locale of a path's first segment, if it is one of ours.
    pub fn of_path(path: &str) -> Option<Self> {
        let first = path.trim_start_matches('/').split('/').next()?;
        Self::from_code(first)
    }
}

/// First supported locale among the browser's preferred languages, matched
/// on the primary subtag (`en-GB` -> `en`).
pub fn negotiate<S: AsRef<str>>(preferred: &[S]) -> Locale {
    preferred
        .iter()
        .filter_map(|tag| {
            let primary = tag.as_ref().split(['-', '_']).next()?;
            Locale::from_code(primary.trim())
        })
        .next()
        .unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleRoute {
    /// Already carries a locale prefix.
    Localized(Locale),
    /// Assets, framework internals and API routes are not localized.
    Excluded,
    Redirect(String),
}

/// Route a pathname (plus its optional `?query`) under the locale prefix.
pub fn route<S: AsRef<str>>(path_and_query: &str, preferred: &[S]) -> LocaleRoute {
    let (path, query) = match path_and_query.find('?') {
        Some(i) => path_and_query.split_at(i),
        None => (path_and_query, ""),
    };
    if is_excluded(path) {
        return LocaleRoute::Excluded;
    }
    if let Some(l) = Locale::of_path(path) {
        return LocaleRoute::Localized(l);
    }
    let locale = negotiate(preferred);
    let rest = path.trim_start_matches('/');
    let target = if rest.is_empty() {
        format!("/{}{}", locale.code(), query)
    } else {
        format!("/{}/{}{}", locale.code(), rest, query)
    };
    LocaleRoute::Redirect(target)
}

fn is_excluded(path: &str) -> bool {
    let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    if matches!(first, "_next" | "_vercel" | "api") {
        return true;
    }
    path.rsplit('/')
        .next()
        .map(|last| last.contains('.'))
        .unwrap_or(false)
}
