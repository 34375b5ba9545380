use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::SiteRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="support-page">
            <div class="container">
                <div class="support-header">
                    <h1>"404 - Page Not Found"</h1>
                    <p>"The page you're looking for doesn't exist or has been moved."</p>
                    <A href=SiteRoute::Home.path()>
                        <span class="btn btn-primary">"Back to Home"</span>
                    </A>
                </div>
            </div>
        </div>
    }
}
