use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::LazyLock;

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(
        deserialize_with = "naive_date_from_str",
        serialize_with = "naive_date_to_str"
    )]
    pub published_at: chrono::NaiveDate,
    /// Display label, not a machine-parsed duration.
    pub reading_time: String,
    pub topics: Vec<String>,
    pub cta: String,
}

fn naive_date_from_str<'de, D>(deserializer: D) -> std::result::Result<chrono::NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

fn naive_date_to_str<S>(
    dt: &chrono::NaiveDate,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(dt.format("%Y-%m-%d").to_string().as_str())
}

fn date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day).expect("publication dates are hardcoded")
}

static ARTICLES: LazyLock<Vec<Article>> = LazyLock::new(|| {
    vec![
        Article {
            id: String::from("design-language"),
            title: String::from("打造产品灵魂的设计语言"),
            summary: String::from(
                "分享从品牌识别出发，如何建立一套一致且富有情感的设计语言，强化用户的情感连结。",
            ),
            published_at: date(2025, 7, 12),
            reading_time: String::from("阅读时间 6 分钟"),
            topics: vec![String::from("Design"), String::from("Branding")],
            cta: String::from("探索设计理念"),
        },
        Article {
            id: String::from("crafting-experience"),
            title: String::from("专注细节，打造流畅体验"),
            summary: String::from(
                "从用户旅程出发，拆解体验设计的关键细节，确保每一次互动都充满惊喜与效率。",
            ),
            published_at: date(2025, 6, 27),
            reading_time: String::from("阅读时间 8 分钟"),
            topics: vec![String::from("UX"), String::from("Product")],
            cta: String::from("阅读完整文章"),
        },
        Article {
            id: String::from("storytelling"),
            title: String::from("用故事传递价值"),
            summary: String::from(
                "谈谈内容策略如何与产品愿景呼应，通过故事引导用户理解并爱上你的产品。",
            ),
            published_at: date(2025, 5, 18),
            reading_time: String::from("阅读时间 5 分钟"),
            topics: vec![String::from("Storytelling"), String::from("Content")],
            cta: String::from("了解叙事策略"),
        },
    ]
});

pub(super) fn all() -> &'static [Article] {
    &ARTICLES
}
