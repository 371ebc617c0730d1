use crate::i18n::use_language;
use crate::router::Route;
use folio_content::{Nav, enter_offset};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Route,
    pub on_navigate: Callback<Route>,
}

fn label<'a>(nav: &'a Nav, route: Route) -> &'a str {
    match route {
        Route::Home | Route::NotFound => &nav.home,
        Route::About => &nav.about,
        Route::Projects => &nav.projects,
        Route::Skills => &nav.skills,
        Route::Contact => &nav.contact,
    }
}

#[function_component(Navbar)]
pub fn navbar(p: &Props) -> Html {
    let language = use_language();
    let snap = language.snapshot();
    let nav = &snap.catalogue.nav;
    let menu_open = use_state(|| false);

    let toggle_lang = {
        let language = language.clone();
        Callback::from(move |_| language.toggle())
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let links = Route::NAV
        .into_iter()
        .map(|route| {
            let onclick = {
                let cb = p.on_navigate.clone();
                let menu_open = menu_open.clone();
                Callback::from(move |_| {
                    menu_open.set(false);
                    cb.emit(route);
                })
            };
            let active = if route == p.current { "nav-link active" } else { "nav-link" };
            html! {
                <li>
                    <button
                        class={active}
                        onclick={onclick}
                        aria-current={(route == p.current).then_some("page")}
                    >
                        { label(nav, route) }
                    </button>
                </li>
            }
        })
        .collect::<Html>();

    // Off-canvas menu slides in from the trailing edge; sign flips with the
    // document direction.
    let menu_style = if *menu_open {
        "transform:translateX(0)".to_string()
    } else {
        format!("transform:translateX({}px)", enter_offset(snap.dir, 320.0))
    };

    html! {
        <header role="banner" class="navbar">
            <a href="#main" class="sr-only">{ &nav.skip_to_content }</a>
            <div class="navbar-inner">
                <button class="brand" onclick={{
                    let cb = p.on_navigate.clone();
                    Callback::from(move |_| cb.emit(Route::Home))
                }}>
                    <span class="brand-first">{ &nav.brand_first }</span>
                    {" "}
                    <span class="brand-last">{ &nav.brand_last }</span>
                </button>
                <nav aria-label={nav.home.clone()}>
                    <ul class="nav-links">{ links.clone() }</ul>
                </nav>
                <button
                    class="lang-toggle"
                    onclick={toggle_lang}
                    title={snap.lang.toggled().native_name()}
                    aria-label={nav.toggle_label.clone()}
                >
                    { &nav.toggle_label }
                </button>
                <button
                    class="menu-toggle"
                    onclick={toggle_menu}
                    aria-expanded={(*menu_open).to_string()}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            <div class="mobile-menu" style={menu_style} aria-hidden={(!*menu_open).to_string()}>
                <ul class="nav-links">{ links }</ul>
            </div>
        </header>
    }
}
