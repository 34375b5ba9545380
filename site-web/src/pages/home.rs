//! Home page: hero, feature grid and call to action

use leptos::prelude::*;

use crate::components::{Icon, IconKind};
use crate::content::features::SCREENSHOTS;
use crate::content::FEATURES;
use crate::utils::constants::{APP_STORE_URL, COMPANY_LOCATION, COMPANY_NAME};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <section class="hero">
                <div class="container hero-content">
                    <div class="badge">
                        <Icon kind=IconKind::Sparkles size=12/>
                        "Now Available - MVP Launch"
                    </div>
                    <h1>
                        "AI-Powered Expense Tracking"
                        <span>" That Understands You"</span>
                    </h1>
                    <p>
                        "Your personal AI financial advisor that learns your spending habits, predicts future expenses, and helps you save money automatically."
                    </p>
                    <div class="button-group">
                        <DownloadButton/>
                        <a href="#features" class="btn btn-secondary">"Learn More"</a>
                    </div>

                    <div class="screenshots">
                        {SCREENSHOTS
                            .into_iter()
                            .map(|(src, alt, caption, subcaption)| view! {
                                <div class="screenshot-card">
                                    <img src=src alt=alt/>
                                    <h3>{caption}</h3>
                                    <p>{subcaption}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="features" id="features">
                <div class="container">
                    <h2>"AI That Works For You"</h2>
                    <p class="features-subtitle">
                        "Powered by advanced artificial intelligence to give you smarter financial insights and effortless expense management."
                    </p>
                    <div class="features-grid">
                        {FEATURES
                            .iter()
                            .map(|feature| view! {
                                <div class="feature-card">
                                    <div class="feature-icon">
                                        <Icon kind=feature.icon size=32/>
                                    </div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="cta">
                <div class="container">
                    <h2>"Ready to let AI manage your expenses?"</h2>
                    <p>
                        "Join thousands of users who trust Expenzez AI to track, analyze, and optimize their spending. Get personalized insights in seconds."
                    </p>
                    <div class="cta-buttons">
                        <DownloadButton/>
                        <div class="coming-soon">"Android version coming soon"</div>
                    </div>
                    <p class="cta-attribution">
                        "Proudly developed by "
                        <strong>{COMPANY_NAME}</strong>
                        " - "
                        {COMPANY_LOCATION}
                    </p>
                </div>
            </section>
        </div>
    }
}

#[component]
fn DownloadButton() -> impl IntoView {
    view! {
        <a href=APP_STORE_URL class="btn btn-primary" target="_blank" rel="noopener noreferrer">
            <Icon kind=IconKind::Download size=16/>
            "Download for iOS"
        </a>
    }
}
