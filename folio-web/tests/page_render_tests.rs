use folio_content::{Lang, catalogue};
use folio_web::app::render_route;
use folio_web::components::{Footer, Navbar};
use folio_web::i18n::LanguageProvider;
use folio_web::router::Route;
use futures::executor::block_on;
use yew::prelude::*;
use yew::{Callback, LocalServerRenderer};

#[derive(Properties, PartialEq)]
struct HarnessProps {
    lang: Lang,
    children: Html,
}

#[function_component(Harness)]
fn harness(p: &HarnessProps) -> Html {
    html! {
        <LanguageProvider initial={Some(p.lang)}>
            { p.children.clone() }
        </LanguageProvider>
    }
}

fn render(lang: Lang, body: Html) -> String {
    let props = HarnessProps {
        lang,
        children: body,
    };
    block_on(LocalServerRenderer::<Harness>::with_props(props).render())
}

fn render_page(lang: Lang, route: Route) -> String {
    render(lang, render_route(route, &Callback::noop()))
}

/// Text nodes come back HTML-escaped from the server renderer, so copy
/// containing `&` (e.g. "Tools & Others") must be compared escaped.
fn escaped(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[test]
fn home_page_renders_hero_in_both_languages() {
    for lang in [Lang::En, Lang::Fa] {
        let hero = &catalogue(lang).hero;
        let html = render_page(lang, Route::Home);
        assert!(html.contains(&escaped(&hero.greeting)));
        assert!(html.contains(&escaped(&hero.name)));
        assert!(html.contains(&escaped(&hero.title)));
        assert!(html.contains(&escaped(&hero.cta)));
        for stat in &hero.stats {
            assert!(html.contains(&escaped(&stat.value)));
        }
    }
}

#[test]
fn about_page_renders_achievements_and_timeline() {
    for lang in [Lang::En, Lang::Fa] {
        let about = &catalogue(lang).about;
        let html = render_page(lang, Route::About);
        assert!(html.contains(&escaped(&about.title)));
        assert!(html.contains(&escaped(&about.subtitle)));
        assert!(html.contains(&escaped(&about.summary)));
        for item in &about.achievements_list {
            assert!(html.contains(&escaped(&item.title)));
        }
        for entry in &about.experience_list {
            assert!(html.contains(&escaped(&entry.company)));
            assert!(html.contains(&escaped(&entry.period)));
        }
    }
}

#[test]
fn about_timeline_rail_follows_direction() {
    let en = render_page(Lang::En, Route::About);
    assert!(en.contains("rail-left"));
    assert!(en.contains("margin-left:48px"));

    let fa = render_page(Lang::Fa, Route::About);
    assert!(fa.contains("rail-right"));
    assert!(fa.contains("margin-right:48px"));
}

#[test]
fn projects_page_renders_every_project_and_filter() {
    for lang in [Lang::En, Lang::Fa] {
        let projects = &catalogue(lang).projects;
        let html = render_page(lang, Route::Projects);
        assert!(html.contains(&escaped(&projects.title)));
        assert!(html.contains(&escaped(&projects.subtitle)));
        assert!(html.contains(&escaped(&projects.filters.all)));
        assert!(html.contains(&escaped(&projects.filters.healthcare)));
        for project in &projects.list {
            assert!(html.contains(&escaped(&project.title)), "missing {}", project.id);
            assert!(html.contains(&escaped(&project.category_label)));
        }
    }
}

#[test]
fn skills_page_renders_groups_and_chips() {
    for lang in [Lang::En, Lang::Fa] {
        let skills = &catalogue(lang).skills;
        let html = render_page(lang, Route::Skills);
        assert!(html.contains(&escaped(&skills.categories.frontend)));
        assert!(html.contains(&escaped(&skills.categories.frameworks)));
        assert!(html.contains(&escaped(&skills.categories.styling)));
        assert!(html.contains(&escaped(&skills.categories.tools)));
        assert!(html.contains(&escaped(&skills.other)));
        assert!(html.contains("React"));
        assert!(html.contains("TailwindCSS"));
        assert!(html.contains("REST API"));
    }
}

#[test]
fn contact_page_renders_info_and_form() {
    for lang in [Lang::En, Lang::Fa] {
        let contact = &catalogue(lang).contact;
        let html = render_page(lang, Route::Contact);
        assert!(html.contains(&escaped(&contact.badge)));
        assert!(html.contains(&escaped(&contact.form.send)));
        assert!(html.contains(&escaped(&contact.location_value)));
        assert!(html.contains("09376228320"));
        assert!(html.contains("hidarshoja@gmail.com"));
    }
}

#[test]
fn contact_page_lists_every_channel() {
    let html = render_page(Lang::En, Route::Contact);
    // Phone carries the alternate number as a sub-line.
    assert!(html.contains("09232996418"));
    assert!(html.contains("linkedin.com/in/hidar-shoja"));
    assert!(html.contains("Telegram"));
    assert!(html.contains("@H_programmer"));
    assert!(html.contains("https://t.me/H_programmer"));
    assert!(html.contains("Rubika"));
    assert!(html.contains("@hidar_shoja_programer"));
    assert!(html.contains("https://rubika.ir/hidar_shoja_programer"));
}

#[test]
fn contact_hover_shift_flips_with_direction() {
    let en = render_page(Lang::En, Route::Contact);
    assert!(en.contains("--hover-shift:10px"));

    let fa = render_page(Lang::Fa, Route::Contact);
    assert!(fa.contains("--hover-shift:-10px"));
}

#[test]
fn not_found_page_renders_message() {
    for lang in [Lang::En, Lang::Fa] {
        let copy = &catalogue(lang).not_found;
        let html = render_page(lang, Route::NotFound);
        assert!(html.contains("404"));
        assert!(html.contains(&escaped(&copy.title)));
        assert!(html.contains(&escaped(&copy.back_home)));
    }
}

#[test]
fn navbar_renders_links_toggle_and_skip_link() {
    for lang in [Lang::En, Lang::Fa] {
        let nav = &catalogue(lang).nav;
        let html = render(
            lang,
            html! { <Navbar current={Route::About} on_navigate={Callback::noop()} /> },
        );
        for label in [&nav.home, &nav.about, &nav.projects, &nav.skills, &nav.contact] {
            assert!(html.contains(&escaped(label)));
        }
        assert!(html.contains(&escaped(&nav.toggle_label)));
        assert!(html.contains(&escaped(&nav.skip_to_content)));
        assert!(html.contains("aria-current=\"page\""));
    }
}

#[test]
fn navbar_menu_enters_from_the_trailing_edge() {
    let en = render(
        Lang::En,
        html! { <Navbar current={Route::Home} on_navigate={Callback::noop()} /> },
    );
    assert!(en.contains("translateX(320px)"));

    let fa = render(
        Lang::Fa,
        html! { <Navbar current={Route::Home} on_navigate={Callback::noop()} /> },
    );
    assert!(fa.contains("translateX(-320px)"));
}

#[test]
fn footer_renders_brand_and_copyright() {
    for lang in [Lang::En, Lang::Fa] {
        let cat = catalogue(lang);
        let html = render(lang, html! { <Footer /> });
        assert!(html.contains(&escaped(&cat.nav.brand_first)));
        assert!(html.contains(&escaped(&cat.footer.year)));
        assert!(html.contains(&escaped(&cat.footer.made_with)));
    }
}

#[function_component(DefaultHarness)]
fn default_harness() -> Html {
    // No `initial` prop: the provider reads the stored preference.
    html! {
        <LanguageProvider>
            { render_route(Route::Home, &Callback::noop()) }
        </LanguageProvider>
    }
}

#[test]
fn provider_without_saved_preference_renders_persian() {
    folio_web::i18n::testing::clear();
    let html = block_on(LocalServerRenderer::<DefaultHarness>::new().render());
    assert!(html.contains(&escaped(&catalogue(Lang::Fa).hero.greeting)));
}

#[test]
fn provider_adopts_a_saved_english_preference() {
    folio_web::i18n::testing::store_value("en");
    let html = block_on(LocalServerRenderer::<DefaultHarness>::new().render());
    assert!(html.contains(&escaped(&catalogue(Lang::En).hero.greeting)));
    folio_web::i18n::testing::clear();
}
