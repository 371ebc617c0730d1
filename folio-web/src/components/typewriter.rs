use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
const TYPE_MS: i32 = 50;
#[cfg(target_arch = "wasm32")]
const HOLD_MS: i32 = 3000;
#[cfg(target_arch = "wasm32")]
const DELETE_MS: i32 = 30;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Phrases cycled through in order. Typed and deleted character by
    /// character; iteration is over `char`s so Persian text never splits
    /// mid-codepoint.
    pub texts: Vec<String>,
}

#[function_component(Typewriter)]
pub fn typewriter(p: &Props) -> Html {
    // Server and test renders show the first phrase in full; the animation
    // only runs in the browser.
    let display = use_state(|| {
        if cfg!(target_arch = "wasm32") {
            String::new()
        } else {
            p.texts.first().cloned().unwrap_or_default()
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        let display = display.clone();
        use_effect_with(p.texts.clone(), move |texts| {
            let texts = texts.clone();
            let alive = std::rc::Rc::new(std::cell::Cell::new(true));
            let guard = alive.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if texts.is_empty() {
                    return;
                }
                let mut idx = 0;
                loop {
                    let chars: Vec<char> = texts[idx].chars().collect();
                    for shown in 1..=chars.len() {
                        if !alive.get() {
                            return;
                        }
                        display.set(chars[..shown].iter().collect());
                        let _ = crate::dom::sleep_ms(TYPE_MS).await;
                    }
                    let _ = crate::dom::sleep_ms(HOLD_MS).await;
                    for shown in (0..chars.len()).rev() {
                        if !alive.get() {
                            return;
                        }
                        display.set(chars[..shown].iter().collect());
                        let _ = crate::dom::sleep_ms(DELETE_MS).await;
                    }
                    idx = (idx + 1) % texts.len();
                }
            });
            move || guard.set(false)
        });
    }

    html! {
        <span class="typewriter">
            { (*display).clone() }
            <span class="caret" aria-hidden="true">{ "|" }</span>
        </span>
    }
}
