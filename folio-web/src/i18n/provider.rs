//! Reactive language state for the view tree.
//!
//! A single provider owns the active [`Lang`]; every view reads it through
//! [`use_language`]. Views never mutate the language directly - the only
//! transition is [`LanguageHandle::toggle`], which persists the choice and
//! flips the document direction before the re-render is scheduled, so no
//! subscriber can observe a code paired with the wrong direction.

use crate::i18n::store;
use folio_content::{Catalogue, Direction, Lang, catalogue};
use yew::prelude::*;

/// Consistent view of the active language. All fields derive from the one
/// `lang` value taken at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub lang: Lang,
    pub dir: Direction,
    pub catalogue: &'static Catalogue,
}

impl Snapshot {
    #[must_use]
    pub fn of(lang: Lang) -> Self {
        Self {
            lang,
            dir: lang.dir(),
            catalogue: catalogue(lang),
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.lang.code()
    }

    #[must_use]
    pub const fn is_rtl(&self) -> bool {
        self.dir.is_rtl()
    }
}

/// Handle held by subscribed views: read via [`Self::snapshot`], mutate via
/// [`Self::toggle`]. The provider is the single writer.
#[derive(Clone, PartialEq)]
pub struct LanguageHandle {
    lang: UseStateHandle<Lang>,
}

impl LanguageHandle {
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(*self.lang)
    }

    /// Flip `en <-> fa`. Persists the new code and updates the document's
    /// base direction before notifying subscribers.
    pub fn toggle(&self) {
        let next = self.lang.toggled();
        store::apply_lang(next);
        self.lang.set(next);
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    /// Override for the starting language; `None` reads the saved preference.
    #[prop_or_default]
    pub initial: Option<Lang>,
    pub children: Html,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let initial = props.initial;
    let lang = use_state(move || initial.unwrap_or_else(store::initial_lang));
    let handle = LanguageHandle { lang };
    html! {
        <ContextProvider<LanguageHandle> context={handle}>
            { props.children.clone() }
        </ContextProvider<LanguageHandle>>
    }
}

/// Access the language state from any view under the provider.
///
/// # Panics
/// Panics when called outside a [`LanguageProvider`] scope. That is a
/// composition bug, and failing loudly keeps it visible during development.
#[hook]
pub fn use_language() -> LanguageHandle {
    use_context::<LanguageHandle>()
        .expect("use_language must be called under a LanguageProvider")
}
