use crate::pages::{AboutPage, ContactPage, HomePage, NotFoundPage, ProjectsPage, SkillsPage};
use crate::router::Route;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::components::{Footer, Navbar};
#[cfg(target_arch = "wasm32")]
use crate::i18n::LanguageProvider;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

/// Page body for a route. Kept free of router hooks so server-side render
/// tests can exercise it directly.
#[must_use]
pub fn render_route(route: Route, on_navigate: &Callback<Route>) -> Html {
    match route {
        Route::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
        Route::About => html! { <AboutPage /> },
        Route::Projects => html! { <ProjectsPage /> },
        Route::Skills => html! { <SkillsPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::NotFound => html! { <NotFoundPage on_navigate={on_navigate.clone()} /> },
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <LanguageProvider>
                <Shell />
            </LanguageProvider>
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(Shell)]
fn shell() -> Html {
    let navigator = use_navigator().expect("Shell must render inside a router");
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    let on_navigate = Callback::from(move |target: Route| {
        navigator.push(&target);
    });

    html! {
        <>
            <Navbar current={route} on_navigate={on_navigate.clone()} />
            <main id="main">{ render_route(route, &on_navigate) }</main>
            <Footer />
        </>
    }
}
