use crate::assets::{
    FRAMEWORK_SKILLS, FRONTEND_SKILLS, OTHER_SKILLS, STYLING_SKILLS, Skill, TOOL_SKILLS,
};
use crate::i18n::use_language;
use yew::prelude::*;

fn skill_group(title: &str, skills: &[Skill]) -> Html {
    let bars = skills
        .iter()
        .map(|skill| {
            let fill = format!(
                "width:{}%;background-color:{}",
                skill.level, skill.color
            );
            html! {
                <li class="skill">
                    <span class="skill-name">{ skill.name }</span>
                    <span class="skill-level">{ format!("{}%", skill.level) }</span>
                    <div class="skill-bar" role="presentation">
                        <div class="skill-fill" style={fill}></div>
                    </div>
                </li>
            }
        })
        .collect::<Html>();
    html! {
        <div class="skill-group">
            <h3>{ title }</h3>
            <ul>{ bars }</ul>
        </div>
    }
}

#[function_component(SkillsPage)]
pub fn skills_page() -> Html {
    let snap = use_language().snapshot();
    let skills = &snap.catalogue.skills;

    let chips = OTHER_SKILLS
        .iter()
        .map(|name| html! { <span class="chip">{ *name }</span> })
        .collect::<Html>();

    html! {
        <section class="skills">
            <h2>{ &skills.title }</h2>
            <p class="section-subtitle">{ &skills.subtitle }</p>
            <div class="skill-groups">
                { skill_group(&skills.categories.frontend, FRONTEND_SKILLS) }
                { skill_group(&skills.categories.frameworks, FRAMEWORK_SKILLS) }
                { skill_group(&skills.categories.styling, STYLING_SKILLS) }
                { skill_group(&skills.categories.tools, TOOL_SKILLS) }
            </div>
            <h3>{ &skills.other }</h3>
            <div class="chip-row">{ chips }</div>
        </section>
    }
}
