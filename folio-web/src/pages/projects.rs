use crate::assets;
use crate::i18n::use_language;
use folio_content::{Category, Project};
use yew::prelude::*;

fn project_card(project: &Project, labels: (&str, &str, &str), on_select: Callback<u32>) -> Html {
    let (view_live, view_video, view_details) = labels;
    let open = {
        let id = project.id;
        Callback::from(move |_| on_select.emit(id))
    };
    let tech = project
        .tech
        .iter()
        .map(|name| html! { <span class="tech-chip">{ name }</span> })
        .collect::<Html>();
    html! {
        <article class="project-card">
            <div class="project-shot">
                <img src={assets::project_image(project.id)} alt={project.title.clone()} loading="lazy" />
                <span class="project-category">{ &project.category_label }</span>
            </div>
            <div class="project-body">
                <h3>{ &project.title }</h3>
                <p>{ &project.description }</p>
                <div class="project-tech">{ tech }</div>
                <div class="project-actions">
                    <button class="btn primary">{ view_live }</button>
                    <button class="btn">{ view_video }</button>
                    <button class="btn ghost" onclick={open}>{ view_details }</button>
                </div>
            </div>
        </article>
    }
}

#[function_component(ProjectsPage)]
pub fn projects_page() -> Html {
    let snap = use_language().snapshot();
    let projects = &snap.catalogue.projects;

    // `None` is the "all" chip; otherwise projects match on their filter
    // group, which folds the narrow categories into corporate.
    let filter = use_state(|| Option::<Category>::None);
    let selected = use_state(|| Option::<u32>::None);

    let chips = [
        (projects.filters.all.as_str(), None),
        (projects.filters.fintech.as_str(), Some(Category::Fintech)),
        (projects.filters.ecommerce.as_str(), Some(Category::Ecommerce)),
        (projects.filters.corporate.as_str(), Some(Category::Corporate)),
        (projects.filters.healthcare.as_str(), Some(Category::Healthcare)),
    ]
    .into_iter()
    .map(|(label, group)| {
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_| filter.set(group))
        };
        let class = if *filter == group { "chip active" } else { "chip" };
        html! { <button class={class} onclick={onclick}>{ label }</button> }
    })
    .collect::<Html>();

    let visible: Vec<&Project> = projects
        .list
        .iter()
        .filter(|project| match *filter {
            None => true,
            Some(group) => project.category.filter_group() == group,
        })
        .collect();

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: u32| selected.set(Some(id)))
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let labels = (
        projects.view_live.as_str(),
        projects.view_video.as_str(),
        projects.view_details.as_str(),
    );
    let cards = visible
        .iter()
        .map(|project| project_card(project, labels, on_select.clone()))
        .collect::<Html>();

    let modal = selected
        .and_then(|id| projects.list.iter().find(|project| project.id == id))
        .map(|project| {
            let tech = project
                .tech
                .iter()
                .map(|name| html! { <span class="tech-chip">{ name }</span> })
                .collect::<Html>();
            html! {
                <div class="modal-backdrop" onclick={on_close.clone()}>
                    <div class="modal" role="dialog" aria-modal="true" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <img src={assets::project_image(project.id)} alt={project.title.clone()} />
                        <h2>{ &project.title }</h2>
                        <p>{ &project.description }</p>
                        <div class="project-tech">{ tech }</div>
                        <div class="modal-actions">
                            <button class="btn primary">{ &projects.view_live }</button>
                            <button class="btn">{ &projects.view_video }</button>
                            <button class="btn ghost" onclick={on_close.clone()}>{ "✕" }</button>
                        </div>
                    </div>
                </div>
            }
        });

    html! {
        <section class="projects">
            <h2>{ &projects.title }</h2>
            <p class="section-subtitle">{ &projects.subtitle }</p>
            <div class="filter-row">{ chips }</div>
            if visible.is_empty() {
                <p class="projects-empty">{ &projects.empty }</p>
            } else {
                <div class="project-grid">{ cards }</div>
            }
            { modal }
        </section>
    }
}
