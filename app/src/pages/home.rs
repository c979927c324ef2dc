use leptos::prelude::*;

use crate::components::{ArticleCard, Hero};
use crate::store;

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <Hero/>
        <ArticlesSection/>
        <AboutSection/>
    }
}

#[component]
fn ArticlesSection() -> impl IntoView {
    view! {
        <section id="articles" class="articles">
            <div class="section-intro">
                <span class="eyebrow">"Latest"</span>
                <h2>"设计观点与洞察"</h2>
                <p>
                    "以苹果官网般的细腻感呈现，聚焦于品牌叙事、产品体验与创意策略。通过每篇文章，看见设计背后的思考脉络。"
                </p>
            </div>

            <div class="featured-row">
                <div class="featured-article">
                    <ArticleCard article=store::featured_article().clone()/>
                </div>
                <div class="consulting-card">
                    <h3>"创意咨询"</h3>
                    <p>"需要为品牌或产品注入全新能量？我提供端到端的设计咨询与工作坊。"</p>
                    <a href="#contact">"预约交流" <span class="arrow">"→"</span></a>
                </div>
            </div>

            <div class="article-grid">
                {store::remaining_articles()
                    .iter()
                    .map(|article| view! { <ArticleCard article=article.clone()/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <h2>"关于我"</h2>
            <div class="about-grid">
                <p>
                    "我相信设计的核心价值，是让复杂的科技变得温暖易懂。过去十年间，我协助多个新创与大型品牌完成从产品策略、界面设计到内容叙事的整体体验打造。"
                </p>
                <div class="expertise">
                    <h3>"专长领域"</h3>
                    <ul>
                        <li>"产品体验与服务设计"</li>
                        <li>"品牌定位与视觉策略"</li>
                        <li>"内容叙事与故事设计"</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}
