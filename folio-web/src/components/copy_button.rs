use crate::i18n::use_language;
use yew::prelude::*;

/// Reset delay before the "copied" confirmation reverts.
#[cfg(target_arch = "wasm32")]
const RESET_MS: i32 = 2000;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Text placed on the clipboard.
    pub value: AttrValue,
    /// Accessible name for the button.
    pub label: AttrValue,
}

#[function_component(CopyButton)]
pub fn copy_button(p: &Props) -> Html {
    let snap = use_language().snapshot();
    let copied = use_state(|| false);

    let onclick = {
        let copied = copied.clone();
        let value = p.value.clone();
        Callback::from(move |_| {
            #[cfg(target_arch = "wasm32")]
            {
                let copied = copied.clone();
                let value = value.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match crate::dom::copy_to_clipboard(&value).await {
                        Ok(()) => {
                            copied.set(true);
                            let _ = crate::dom::sleep_ms(RESET_MS).await;
                            copied.set(false);
                        }
                        Err(err) => {
                            // Copy failure is non-fatal; the value stays
                            // visible next to the button.
                            crate::dom::console_error(&format!(
                                "clipboard write failed: {}",
                                crate::dom::js_error_message(&err)
                            ));
                        }
                    }
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = (&copied, &value);
        })
    };

    html! {
        <button
            class="copy-button"
            onclick={onclick}
            aria-label={p.label.clone()}
            title={p.label.clone()}
        >
            { if *copied { snap.catalogue.contact.copied.clone() } else { "📋".to_string() } }
        </button>
    }
}
