//! Expenzez site - Leptos frontend
//!
//! Navigation shell and the route table.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

use crate::components::{Footer, Navbar};
use crate::pages::NotFoundPage;
use crate::routes::{document_title, SiteRoute};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="App">
                <DocumentTitle/>
                <Navbar/>
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=path!("/") view=|| SiteRoute::Home.page().render()/>
                        <Route path=path!("/support") view=|| SiteRoute::Support.page().render()/>
                        <Route path=path!("/privacy") view=|| SiteRoute::Privacy.page().render()/>
                        <Route path=path!("/terms") view=|| SiteRoute::Terms.page().render()/>
                        <Route
                            path=path!("/account-deletion")
                            view=|| SiteRoute::AccountDeletion.page().render()
                        />
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

/// Keeps `document.title` in step with the current route.
#[component]
fn DocumentTitle() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        let path = location.pathname.get();
        let title = document_title(&path);
        log::debug!("[ROUTER] {} -> {}", path, title);
        document().set_title(&title);
    });
}
