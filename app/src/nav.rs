use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// A navigation entry: a target route plus an optional in-page anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: &'static str,
    pub anchor: Option<&'static str>,
}

/// The links shown in the navigation bar, in display order.
pub static LINKS: [NavLink; 3] = [
    NavLink {
        label: "文章",
        route: "/",
        anchor: Some("articles"),
    },
    NavLink {
        label: "项目",
        route: "/projects",
        anchor: None,
    },
    NavLink {
        label: "关于我",
        route: "/",
        anchor: Some("about"),
    },
];

impl NavLink {
    /// The location this link points at, anchor included as a fragment.
    pub fn href(&self) -> String {
        match self.anchor {
            Some(anchor) => format!("{}#{}", self.route, anchor),
            None => String::from(self.route),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Smooth-scroll to the element with this id on the current page.
    ScrollTo(&'static str),
    /// Leave the current page for this location.
    Navigate(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkState {
    pub active: bool,
    pub action: Action,
}

/// Decide what activating `link` does while the router is on `current_route`.
///
/// A link is active only when it targets the current route and carries no
/// anchor; an anchor names a sub-section of a page, not a navigational state
/// of its own, so anchor links are never marked active. An anchor that lives
/// on the page being displayed turns into a scroll request, everything else
/// into a route change.
pub fn resolve(current_route: &str, link: &NavLink) -> LinkState {
    let active = link.anchor.is_none() && link.route == current_route;
    let action = match link.anchor {
        Some(anchor) if link.route == current_route => Action::ScrollTo(anchor),
        // Cross-page anchors keep the fragment in the href; scrolling once
        // the destination page has mounted is left to the browser.
        _ => Action::Navigate(link.href()),
    };
    LinkState { active, action }
}

/// Smooth-scroll to the element with the given id. An anchor that points at
/// nothing in the current document is skipped, not an error.
pub fn scroll_to_anchor(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::debug!("no element with id `{id}' to scroll to"),
    }
}
