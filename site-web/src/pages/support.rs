//! Support page: channels, FAQ and the contact form

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::{FaqList, Icon, IconKind};
use crate::content::support::{ChannelContact, CONTACT_SUBJECTS, SECURITY_NOTICE, SUPPORT_CHANNELS};
use crate::content::FAQ_ENTRIES;
use crate::utils::constants::{COMPANY_NAME, SUPPORT_EMAIL};
use crate::utils::format::{contact_message_body, mailto_link};

#[component]
pub fn SupportPage() -> impl IntoView {
    view! {
        <div class="support-page">
            <div class="container">
                <div class="support-header">
                    <h1>"How can we help you?"</h1>
                    <p>"Get support, find answers to common questions, or reach out to our team directly."</p>
                </div>

                <div class="support-options">
                    {SUPPORT_CHANNELS
                        .into_iter()
                        .map(|channel| {
                            let contact = match channel.contact {
                                ChannelContact::Email(email) => view! {
                                    <a href=format!("mailto:{}", email)>{email}</a>
                                }
                                .into_any(),
                                ChannelContact::Note(note) => view! { <span>{note}</span> }.into_any(),
                            };
                            view! {
                                <div class="support-card">
                                    <div class="support-card-icon">
                                        <Icon kind=channel.icon size=32/>
                                    </div>
                                    <h3>{channel.title}</h3>
                                    <p>{channel.description}</p>
                                    {contact}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="faq-section">
                    <h2>"Frequently Asked Questions"</h2>
                    <FaqList entries=&FAQ_ENTRIES/>
                </div>

                <div class="security-notice">
                    <Icon kind=IconKind::Shield size=24/>
                    <div>
                        <h3>{SECURITY_NOTICE.title}</h3>
                        <p>{SECURITY_NOTICE.body}</p>
                        <a href=format!("mailto:{}", SECURITY_NOTICE.email)>{SECURITY_NOTICE.email}</a>
                        <p class="security-response">{SECURITY_NOTICE.response_time}</p>
                    </div>
                </div>

                <ContactForm/>
            </div>
        </div>
    }
}

/// Composes a `mailto:` for the support inbox and hands it to the browser.
#[component]
fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(CONTACT_SUBJECTS[0].to_string());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let body = contact_message_body(&name.get_untracked(), &email.get_untracked(), &message.get_untracked());
        let link = mailto_link(SUPPORT_EMAIL, &subject.get_untracked(), &body);
        log::info!("[SUPPORT] Opening mail client: {}", subject.get_untracked());
        if let Err(e) = window().location().set_href(&link) {
            log::error!("[SUPPORT] Failed to open mail client: {:?}", e);
        }
    };

    view! {
        <div class="contact-form">
            <h2>"Still need help?"</h2>
            <p class="contact-form-subtitle">{COMPANY_NAME}" - We're here to help you"</p>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label class="form-label" for="contact-name">"Name"</label>
                    <input
                        id="contact-name"
                        type="text"
                        class="form-input"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label class="form-label" for="contact-email">"Email"</label>
                    <input
                        id="contact-email"
                        type="email"
                        class="form-input"
                        placeholder="your@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label class="form-label" for="contact-subject">"Subject"</label>
                    <select
                        id="contact-subject"
                        class="form-select"
                        prop:value=move || subject.get()
                        on:change=move |ev| subject.set(event_target_value(&ev))
                    >
                        {CONTACT_SUBJECTS
                            .into_iter()
                            .map(|option| view! { <option value=option>{option}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label class="form-label" for="contact-message">"Message"</label>
                    <textarea
                        id="contact-message"
                        class="form-textarea"
                        placeholder="Please describe your issue or question in detail..."
                        required
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button type="submit" class="form-submit">"Send Message"</button>
            </form>
        </div>
    }
}
