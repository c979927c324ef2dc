use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::nav::{self, Action};
use crate::store::Article;

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <header class="site-header">
            <nav>
                <div class="brand">
                    <A href="/">"Lin.S – Visionary Designer"</A>
                </div>
                <ul class="nav-links">
                    {nav::LINKS
                        .iter()
                        .map(|link| {
                            let navigate = use_navigate();
                            let active = move || nav::resolve(pathname.get().as_str(), link).active;
                            let on_activate = move |ev: MouseEvent| {
                                ev.prevent_default();
                                let state = nav::resolve(pathname.get_untracked().as_str(), link);
                                match state.action {
                                    Action::ScrollTo(anchor) => nav::scroll_to_anchor(anchor),
                                    Action::Navigate(to) => navigate(&to, Default::default()),
                                }
                            };
                            view! {
                                <li>
                                    <a href=link.href() class:active=active on:click=on_activate>
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a class="contact" href="#contact">"联系我"</a>
            </nav>
        </header>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <span class="eyebrow">"Creative Direction"</span>
            <h1>"以设计的力量，将抽象愿景化为令人向往的体验。"</h1>
            <p>
                "我是 Lin，一位专注于产品体验与品牌叙事的创意设计师。灵感来自自然、科技与人文，我相信细节决定故事的深度。"
            </p>
            <div class="hero-actions">
                <a class="primary" href="#articles">"最新洞察"</a>
                <a class="secondary" href="#about">"认识我"</a>
            </div>
        </section>
    }
}

#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let Article {
        title,
        summary,
        published_at,
        reading_time,
        topics,
        cta,
        ..
    } = article;

    view! {
        <article class="article-card">
            <div class="article-meta">
                <span>{published_at.format("%Y/%-m/%-d").to_string()}</span>
                <span class="separator">"•"</span>
                <span>{reading_time}</span>
            </div>
            <h3>{title}</h3>
            <p>{summary}</p>
            <div class="topics">
                {topics
                    .into_iter()
                    .map(|topic| view! { <span class="topic">{topic}</span> })
                    .collect_view()}
            </div>
            <a class="cta" href="#">{cta} <span class="arrow">"→"</span></a>
        </article>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id="contact">
            <p>{format!("© {year} Lin Studio. 灵感来自 Apple。")}</p>
            <div class="footer-links">
                <a href="mailto:hello@linstudio.design">"hello@linstudio.design"</a>
                <a href="https://www.linkedin.com" target="_blank" rel="noreferrer">"LinkedIn"</a>
                <a href="https://www.behance.net" target="_blank" rel="noreferrer">"Behance"</a>
            </div>
        </footer>
    }
}
