use crate::assets;
use crate::components::Typewriter;
use crate::i18n::use_language;
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_navigate: Callback<Route>,
}

#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let snap = use_language().snapshot();
    let hero = &snap.catalogue.hero;

    let to_projects = {
        let cb = p.on_navigate.clone();
        Callback::from(move |_| cb.emit(Route::Projects))
    };
    let to_contact = {
        let cb = p.on_navigate.clone();
        Callback::from(move |_| cb.emit(Route::Contact))
    };

    let stats = hero
        .stats
        .iter()
        .map(|stat| {
            html! {
                <div class="stat">
                    <span class="stat-value">{ &stat.value }</span>
                    <span class="stat-label">{ &stat.label }</span>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section class="hero">
            <p class="hero-greeting">{ &hero.greeting }</p>
            <h1 class="hero-name">{ &hero.name }</h1>
            <h2 class="hero-title">
                <Typewriter texts={vec![hero.title.clone(), hero.subtitle.clone()]} />
            </h2>
            <p class="hero-description">{ &hero.description }</p>
            <div class="hero-actions">
                <button class="btn primary" onclick={to_projects}>{ &hero.cta }</button>
                <button class="btn" onclick={to_contact}>{ &hero.contact }</button>
            </div>
            <ul class="hero-social">
                <li>
                    <a href={assets::GITHUB_URL} target="_blank" rel="noreferrer">{ "GitHub" }</a>
                </li>
                <li>
                    <a href={assets::LINKEDIN_URL} target="_blank" rel="noreferrer">{ "LinkedIn" }</a>
                </li>
                <li>
                    <a href={format!("mailto:{}", assets::EMAIL)}>{ "Email" }</a>
                </li>
            </ul>
            <div class="hero-stats">{ stats }</div>
        </section>
    }
}
