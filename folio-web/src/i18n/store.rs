//! Persistence and document side effects for the language preference.
//!
//! One key, one scalar value. Reads happen once at startup; writes happen on
//! every toggle, best effort with no retry. Invalid or absent stored values
//! fall back to the default language and are never surfaced as errors.

use folio_content::Lang;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "folio.lang";

/// Read the persisted preference. An exact match on a known code is adopted;
/// absence, storage failure, or an unrecognized value all yield the default.
#[must_use]
pub fn initial_lang() -> Lang {
    match read_saved() {
        Some(code) => Lang::from_code(&code).unwrap_or_else(|| {
            log::warn!("ignoring unrecognized saved language {code:?}");
            Lang::DEFAULT
        }),
        None => Lang::DEFAULT,
    }
}

/// Persist the choice and flip the document's base direction and declared
/// language. Called on every change and once at startup so the first paint
/// already has the right direction.
pub fn apply_lang(lang: Lang) {
    persist(lang);
    set_document_lang(lang);
}

#[cfg(target_arch = "wasm32")]
fn read_saved() -> Option<String> {
    crate::dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
}

#[cfg(target_arch = "wasm32")]
fn persist(lang: Lang) {
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(STORAGE_KEY, lang.code());
    }
}

#[cfg(target_arch = "wasm32")]
fn set_document_lang(lang: Lang) {
    if let Some(el) = crate::dom::document().document_element() {
        let _ = el.set_attribute("lang", lang.code());
        let _ = el.set_attribute("dir", lang.dir().as_attr());
    }
}

// Native builds back the preference with an in-memory slot so persistence
// behavior stays observable in tests without a browser.

#[cfg(not(target_arch = "wasm32"))]
fn read_saved() -> Option<String> {
    testing::saved_value()
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(lang: Lang) {
    testing::store_value(lang.code());
}

#[cfg(not(target_arch = "wasm32"))]
fn set_document_lang(_lang: Lang) {}

#[cfg(not(target_arch = "wasm32"))]
pub mod testing {
    use std::cell::RefCell;

    thread_local! {
        static SAVED: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    #[must_use]
    pub fn saved_value() -> Option<String> {
        SAVED.with(|slot| slot.borrow().clone())
    }

    pub fn store_value(code: &str) {
        SAVED.with(|slot| *slot.borrow_mut() = Some(code.to_string()));
    }

    pub fn clear() {
        SAVED.with(|slot| *slot.borrow_mut() = None);
    }
}
