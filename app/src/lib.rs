pub mod components;
pub mod nav;
pub mod pages;
pub mod store;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use components::{Footer, NavBar};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|text: String| {
            if text.is_empty() {
                format!("Lin.S – Visionary Designer")
            } else {
                format!("{} - Lin.S – Visionary Designer", text)
            }
        }/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=pages::home::Index
                    />
                    <Route
                        path=StaticSegment("projects")
                        view=pages::projects::Index
                    />
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
