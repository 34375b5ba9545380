//! Site footer

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icons::{Icon, IconKind};
use crate::routes::SiteRoute;
use crate::utils::constants::{APP_STORE_URL, COMPANY_LOCATION, SUPPORT_EMAIL};
use crate::utils::format::{copyright_line, current_year};

const QUICK_LINKS: [SiteRoute; 5] = [
    SiteRoute::Home,
    SiteRoute::Support,
    SiteRoute::Privacy,
    SiteRoute::Terms,
    SiteRoute::AccountDeletion,
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-container">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <Icon kind=IconKind::Smartphone size=32/>
                            <span>"Expenzez"</span>
                        </div>
                        <p class="footer-blurb">
                            "Transform your financial life with intelligent expense tracking, banking integration, and AI-powered insights designed for UK users."
                        </p>
                        <a href=APP_STORE_URL class="btn btn-primary" target="_blank" rel="noopener noreferrer">
                            <Icon kind=IconKind::Download size=16/>
                            "Download for iOS"
                        </a>
                    </div>

                    <div>
                        <h4>"Quick Links"</h4>
                        <ul class="footer-links">
                            {QUICK_LINKS
                                .into_iter()
                                .map(|route| view! { <li><A href=route.path()>{route.title()}</A></li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4>"Contact"</h4>
                        <ul class="footer-links">
                            <li class="footer-contact">
                                <Icon kind=IconKind::Mail size=16/>
                                <a href=format!("mailto:{}", SUPPORT_EMAIL)>{SUPPORT_EMAIL}</a>
                            </li>
                            <li class="footer-contact">
                                <Icon kind=IconKind::MapPin size=16/>
                                <span>{COMPANY_LOCATION}</span>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright_line(current_year())}</p>
                    <div class="footer-bottom-links">
                        <A href=SiteRoute::Privacy.path()>"Privacy Policy"</A>
                        <A href=SiteRoute::Terms.path()>"Terms of Service"</A>
                    </div>
                </div>
            </div>
        </footer>
    }
}
