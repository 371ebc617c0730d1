use crate::i18n::use_language;
use folio_content::mirror;
use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let snap = use_language().snapshot();
    let about = &snap.catalogue.about;

    let achievements = about
        .achievements_list
        .iter()
        .map(|item| {
            html! {
                <article class="achievement-card">
                    <span class="achievement-icon" aria-hidden="true">{ &item.icon }</span>
                    <h4>{ &item.title }</h4>
                    <p>{ &item.description }</p>
                </article>
            }
        })
        .collect::<Html>();

    // The timeline rail hugs the leading edge, so every entry is pushed away
    // from it by the same margin. Which physical side that is depends on the
    // active direction.
    let rail = mirror::timeline_side(snap.dir);
    let entry_style = mirror::leading_margin(snap.dir, 48);
    let last = about.experience_list.len().saturating_sub(1);

    let experience = about
        .experience_list
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let marker = if i == last { "🎓" } else { "💼" };
            let responsibilities = entry
                .responsibilities
                .iter()
                .map(|duty| html! { <li>{ duty }</li> })
                .collect::<Html>();
            html! {
                <li class="timeline-entry" style={entry_style.clone()}>
                    <span class="timeline-marker" aria-hidden="true">{ marker }</span>
                    <h4>{ &entry.role }</h4>
                    <p class="timeline-company">{ &entry.company }</p>
                    <p class="timeline-period">{ &entry.period }</p>
                    <ul class="timeline-duties">{ responsibilities }</ul>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <section class="about">
            <h2>{ &about.title }</h2>
            <p class="section-subtitle">{ &about.subtitle }</p>
            <div class="about-summary">
                <p>{ &about.summary }</p>
            </div>
            <h3>{ &about.achievements }</h3>
            <div class="achievement-grid">{ achievements }</div>
            <h3>{ &about.experience }</h3>
            <ol class={classes!("timeline", format!("rail-{}", rail.css()))}>
                { experience }
            </ol>
        </section>
    }
}
