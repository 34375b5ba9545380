use leptos::prelude::*;

use crate::components::LegalPage;
use crate::content::legal::TERMS_OF_SERVICE;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalPage document=&TERMS_OF_SERVICE/> }
}
