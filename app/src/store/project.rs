use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub role: String,
    /// Display label; not necessarily a parseable integer.
    pub year: String,
    pub highlight: String,
}

static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        Project {
            id: String::from("aurora"),
            name: String::from("Aurora OS"),
            description: String::from("以自然光影为灵感的智能家居体验系统。"),
            role: String::from("Creative Director · 系统体验设计"),
            year: String::from("2025"),
            highlight: String::from("（概念影片入选 IF Design Award）"),
        },
        Project {
            id: String::from("atlas"),
            name: String::from("Atlas Mobility"),
            description: String::from("重新定义城市通勤的无缝票务与导览服务。"),
            role: String::from("Lead Designer · 产品策略"),
            year: String::from("2024"),
            highlight: String::from("（5 个月内上线 MVP）"),
        },
        Project {
            id: String::from("muse"),
            name: String::from("Muse Studio"),
            description: String::from("结合 AI 的创作者协作工具，强调故事叙事。"),
            role: String::from("Design Partner · 品牌叙事"),
            year: String::from("2023"),
            highlight: String::from("（提升留存率 38%）"),
        },
    ]
});

pub(super) fn all() -> &'static [Project] {
    &PROJECTS
}
