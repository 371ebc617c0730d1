use crate::i18n::use_language;
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(p: &Props) -> Html {
    let snap = use_language().snapshot();
    let copy = &snap.catalogue.not_found;
    let back = {
        let cb = p.on_navigate.clone();
        Callback::from(move |_| cb.emit(Route::Home))
    };
    html! {
        <section class="not-found">
            <h1>{ "404" }</h1>
            <h2>{ &copy.title }</h2>
            <p>{ &copy.body }</p>
            <button class="btn primary" onclick={back}>{ &copy.back_home }</button>
        </section>
    }
}
