use leptos::prelude::*;

use crate::components::LegalPage;
use crate::content::legal::PRIVACY_POLICY;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalPage document=&PRIVACY_POLICY/> }
}
