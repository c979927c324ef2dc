mod article;
mod project;

pub use article::Article;
pub use project::Project;

/// All articles in declared order. The collection is compiled in and never
/// empty; its first entry is the featured one.
pub fn articles() -> &'static [Article] {
    article::all()
}

pub fn featured_article() -> &'static Article {
    &articles()[0]
}

/// Every article except the featured one, in declared order.
pub fn remaining_articles() -> &'static [Article] {
    &articles()[1..]
}

/// All projects in declared order.
pub fn projects() -> &'static [Project] {
    project::all()
}
