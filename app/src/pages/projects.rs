use leptos::prelude::*;
use leptos_meta::Title;

use crate::store;

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <Title text="精选项目"/>
        <section id="projects" class="projects">
            <div class="section-intro">
                <span class="eyebrow">"Projects"</span>
                <h2>"精选项目"</h2>
                <p>"从系统体验到品牌叙事，每一个项目都以极致细节打造难忘体验。"</p>
            </div>

            <div class="project-grid">
                {store::projects()
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <div class="project-year">{project.year.clone()}</div>
                                <h3>{project.name.clone()}</h3>
                                <p class="description">{project.description.clone()}</p>
                                <p class="role">{project.role.clone()}</p>
                                <p class="highlight">{project.highlight.clone()}</p>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
