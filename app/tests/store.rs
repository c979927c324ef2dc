use std::collections::HashSet;

use app::store;

#[test]
fn article_ids_are_unique() {
    let mut seen = HashSet::new();
    for article in store::articles() {
        assert!(
            seen.insert(article.id.as_str()),
            "duplicate article id `{}'",
            article.id,
        );
    }
}

#[test]
fn project_ids_are_unique() {
    let mut seen = HashSet::new();
    for project in store::projects() {
        assert!(
            seen.insert(project.id.as_str()),
            "duplicate project id `{}'",
            project.id,
        );
    }
}

#[test]
fn featured_article_is_the_first_declared() {
    let all = store::articles();
    assert!(!all.is_empty());
    assert_eq!(all[0].id, store::featured_article().id);
}

#[test]
fn remaining_articles_keep_declared_order() {
    let all = store::articles();
    let rest = store::remaining_articles();

    assert_eq!(all.len() - 1, rest.len());
    for (declared, remaining) in all[1..].iter().zip(rest.iter()) {
        assert_eq!(declared.id, remaining.id);
    }
}

#[test]
fn publication_dates_round_trip_through_serde() {
    let featured = store::featured_article();
    let json = serde_json::to_string(featured).unwrap();
    let back: store::Article = serde_json::from_str(&json).unwrap();
    assert_eq!(featured.published_at, back.published_at);
}
