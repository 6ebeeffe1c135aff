use std::ops::Index;

use serde::Serialize;

use crate::language::Language;
use crate::locale::resolve_language;

/// One value per supported language.
///
/// A fixed struct rather than a map, so a container can never be missing a
/// language or carry an extra one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Translated<T> {
    pub en: T,
    pub es: T,
    pub pt: T,
}

impl<T> Translated<T> {
    pub const fn new(en: T, es: T, pt: T) -> Self {
        Self { en, es, pt }
    }

    /// Best language for a locale tag. Same as [`resolve_language`]; prefer the
    /// free function, since this form needs a type argument (`Translated::<T>::lang`).
    pub fn lang(locale: &str) -> Language {
        resolve_language(locale)
    }

    /// The value for a locale tag, or the English value if the locale is unsupported.
    pub fn get(&self, locale: &str) -> &T {
        self.by_language(resolve_language(locale))
    }

    pub const fn by_language(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Es => &self.es,
            Language::Pt => &self.pt,
        }
    }

    /// Iterate `(language, value)` pairs in [`Language::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> + '_ {
        Language::ALL
            .into_iter()
            .map(move |lang| (lang, self.by_language(lang)))
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Translated<U> {
        Translated {
            en: f(self.en),
            es: f(self.es),
            pt: f(self.pt),
        }
    }

    pub fn each_ref(&self) -> Translated<&T> {
        Translated {
            en: &self.en,
            es: &self.es,
            pt: &self.pt,
        }
    }
}

impl<T> Index<Language> for Translated<T> {
    type Output = T;

    fn index(&self, lang: Language) -> &T {
        self.by_language(lang)
    }
}
