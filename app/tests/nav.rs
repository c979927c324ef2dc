use app::nav::{self, Action, NavLink};

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn plain_links_are_active_only_on_their_route() {
    setup();

    let link = NavLink {
        label: "项目",
        route: "/projects",
        anchor: None,
    };
    assert!(nav::resolve("/projects", &link).active);
    assert!(!nav::resolve("/", &link).active);
}

#[test]
fn anchor_links_are_never_active() {
    setup();

    let link = NavLink {
        label: "关于我",
        route: "/",
        anchor: Some("about"),
    };
    assert!(!nav::resolve("/", &link).active);
    assert!(!nav::resolve("/projects", &link).active);
}

#[test]
fn same_page_anchor_scrolls_instead_of_navigating() {
    setup();

    let link = NavLink {
        label: "关于我",
        route: "/",
        anchor: Some("about"),
    };
    assert_eq!(Action::ScrollTo("about"), nav::resolve("/", &link).action);
}

#[test]
fn cross_page_anchor_navigates_with_the_fragment() {
    setup();

    let link = NavLink {
        label: "关于我",
        route: "/",
        anchor: Some("about"),
    };
    assert_eq!(
        Action::Navigate(String::from("/#about")),
        nav::resolve("/projects", &link).action,
    );
}

#[test]
fn route_links_navigate_and_become_active_after_the_transition() {
    setup();

    let link = NavLink {
        label: "项目",
        route: "/projects",
        anchor: None,
    };
    let state = nav::resolve("/", &link);
    assert!(!state.active);
    assert_eq!(Action::Navigate(String::from("/projects")), state.action);
    assert!(nav::resolve("/projects", &link).active);
}

#[test]
fn nav_bar_links_target_declared_routes_only() {
    setup();

    for link in nav::LINKS.iter() {
        assert!(
            link.route == "/" || link.route == "/projects",
            "link `{}' targets unknown route `{}'",
            link.label,
            link.route,
        );
    }
}

#[test]
fn hrefs_carry_the_anchor_as_a_fragment() {
    setup();

    let with_anchor = NavLink {
        label: "文章",
        route: "/",
        anchor: Some("articles"),
    };
    let without_anchor = NavLink {
        label: "项目",
        route: "/projects",
        anchor: None,
    };
    assert_eq!("/#articles", with_anchor.href());
    assert_eq!("/projects", without_anchor.href());
}
