//! # Account Deletion Page
//!
//! Explains the three ways to delete an account and hosts the web form. The
//! form is driven by a [`DeletionRequestDraft`]; submission goes through the
//! build's [`DeletionGateway`] and swaps the page for a confirmation once a
//! reference id comes back.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::components::{Icon, IconKind};
use crate::content::deletion::{
    gdpr_notice, next_steps, CONFIRMATION_LABEL, CONTACT_REFERENCE_TIP, EMAIL_HINT,
    EMAIL_PLACEHOLDER, EMAIL_REQUEST_ITEMS, IN_APP_NOTE, IN_APP_STEPS, PAGE_INTRO, PAGE_TITLE,
    REASON_PLACEHOLDER, REMOVED_DATA,
};
use crate::routes::SiteRoute;
use crate::services::DeletionGateway;
use crate::state::DeletionRequestDraft;
use crate::utils::constants::{PRIVACY_EMAIL, SUPPORT_EMAIL};
use shared::utils::MAX_REASON_CHARS;

#[component]
pub fn AccountDeletionPage() -> impl IntoView {
    let draft = RwSignal::new(DeletionRequestDraft::new());

    // Changes only when the request is accepted, not on every keystroke.
    let submitted = Memo::new(move |_| {
        draft.with(|d| {
            d.reference_id()
                .map(|reference_id| (reference_id.to_string(), d.email().trim().to_string()))
        })
    });

    move || match submitted.get() {
        Some((reference_id, email)) => {
            view! { <RequestSubmitted reference_id=reference_id email=email/> }.into_any()
        }
        None => view! { <DeletionOverview draft=draft/> }.into_any(),
    }
}

#[component]
fn DeletionOverview(draft: RwSignal<DeletionRequestDraft>) -> impl IntoView {
    view! {
        <div class="support-page">
            <div class="container">
                <div class="support-header">
                    <h1>{PAGE_TITLE}</h1>
                    <p>{PAGE_INTRO}</p>
                </div>

                <div class="deletion-content">
                    <h2 class="section-title">"How to Delete Your Account"</h2>

                    <div class="support-options">
                        <div class="support-card">
                            <div class="support-card-icon">
                                <Icon kind=IconKind::Target size=32/>
                            </div>
                            <h3>"Method 1: In-App Deletion (Recommended)"</h3>
                            <ol class="method-steps">
                                {IN_APP_STEPS
                                    .into_iter()
                                    .map(|step| view! {
                                        <li>
                                            {step.text}
                                            {step.strong.map(|strong| view! { <strong>{strong}</strong> })}
                                        </li>
                                    })
                                    .collect_view()}
                            </ol>
                            <p class="method-note">{IN_APP_NOTE}</p>
                        </div>

                        <div class="support-card">
                            <div class="support-card-icon">
                                <Icon kind=IconKind::Mail size=32/>
                            </div>
                            <h3>"Method 2: Email Request"</h3>
                            <p class="method-text">
                                "Send an email to "
                                <a href=format!("mailto:{}", PRIVACY_EMAIL)>{PRIVACY_EMAIL}</a>
                                " with:"
                            </p>
                            <ul class="method-steps">
                                {EMAIL_REQUEST_ITEMS
                                    .into_iter()
                                    .map(|item| view! { <li>{item}</li> })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class="support-card">
                            <div class="support-card-icon">
                                <Icon kind=IconKind::FileText size=32/>
                            </div>
                            <h3>"Method 3: Web Form (Below)"</h3>
                            <p class="method-text">"Fill out the form below to submit your deletion request."</p>
                        </div>
                    </div>

                    <DeletionForm draft=draft/>

                    <div class="support-card info-card">
                        <h3>"Your Rights Under GDPR"</h3>
                        <p>
                            {gdpr_notice()}
                            " "
                            <A href=SiteRoute::Privacy.path()>"Privacy Policy"</A>
                            "."
                        </p>
                    </div>

                    <div class="support-card info-card">
                        <h3>"Need Help?"</h3>
                        <p>"If you have questions about account deletion or data privacy, contact us at:"</p>
                        <p>
                            <strong>"Email:"</strong>
                            " "
                            <a href=format!("mailto:{}", PRIVACY_EMAIL)>{PRIVACY_EMAIL}</a>
                        </p>
                        <p>
                            <strong>"Support:"</strong>
                            " "
                            <a href=format!("mailto:{}", SUPPORT_EMAIL)>{SUPPORT_EMAIL}</a>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DeletionForm(draft: RwSignal<DeletionRequestDraft>) -> impl IntoView {
    let gateway = DeletionGateway::from_build_config();
    let locked = move || draft.with(|d| !d.is_editable());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let request = match draft.try_update(|d| d.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                log::warn!("[DELETION] Submission refused: {}", e);
                return;
            }
            None => return,
        };

        let gateway = gateway.clone();
        spawn_local(async move {
            let outcome = gateway.submit(request).await;
            // try_update is a no-op once the page has been left.
            let applied = draft.try_update(move |d| match outcome {
                Ok(reference_id) => d.complete(reference_id),
                Err(e) => d.fail(e),
            });
            if applied.is_none() {
                log::debug!("[DELETION] Page closed before the request completed");
            }
        });
    };

    view! {
        <div class="contact-form deletion-form">
            <h2>"Submit Deletion Request"</h2>
            <form on:submit=on_submit>
                <div class="form-group">
                    <label class="form-label" for="deletion-email">
                        "Email Address "
                        <span class="required">"*"</span>
                    </label>
                    <input
                        id="deletion-email"
                        type="email"
                        class="form-input"
                        placeholder=EMAIL_PLACEHOLDER
                        required
                        disabled=locked
                        prop:value=move || draft.with(|d| d.email().to_string())
                        on:input=move |ev| draft.update(|d| d.set_email(event_target_value(&ev)))
                    />
                    <small class="form-hint">{EMAIL_HINT}</small>
                </div>

                <div class="form-group">
                    <label class="form-label" for="deletion-reason">"Reason for Deletion (Optional)"</label>
                    <textarea
                        id="deletion-reason"
                        class="form-textarea"
                        placeholder=REASON_PLACEHOLDER
                        rows="4"
                        maxlength=MAX_REASON_CHARS.to_string()
                        disabled=locked
                        prop:value=move || draft.with(|d| d.reason().to_string())
                        on:input=move |ev| draft.update(|d| d.set_reason(event_target_value(&ev)))
                    ></textarea>
                </div>

                <div class="deletion-warning">
                    <Icon kind=IconKind::AlertTriangle size=24 class="warning-icon"/>
                    <div>
                        <strong>"Warning: This action cannot be undone"</strong>
                        <p>"Deleting your account will permanently remove:"</p>
                        <ul>
                            {REMOVED_DATA.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>

                <label class="form-group form-checkbox">
                    <input
                        type="checkbox"
                        required
                        disabled=locked
                        prop:checked=move || draft.with(|d| d.accepted())
                        on:change=move |ev| draft.update(|d| d.set_accepted(event_target_checked(&ev)))
                    />
                    <span>{CONFIRMATION_LABEL}</span>
                </label>

                {move || {
                    draft
                        .with(|d| d.error_message())
                        .map(|message| view! { <p class="form-error" role="alert">{message}</p> })
                }}

                <button
                    type="submit"
                    class="form-submit"
                    class:loading=move || draft.with(|d| d.is_submitting())
                    disabled=move || draft.with(|d| d.is_submitting())
                >
                    {move || draft.with(|d| d.submit_label())}
                </button>
            </form>
        </div>
    }
}

#[component]
fn RequestSubmitted(reference_id: String, email: String) -> impl IntoView {
    let [deletion_step, final_step] = next_steps();

    view! {
        <div class="support-page">
            <div class="container">
                <div class="support-header">
                    <div class="submitted-icon">
                        <Icon kind=IconKind::CheckCircle size=64/>
                    </div>
                    <h1>"Request Submitted"</h1>
                    <p>"Your account deletion request has been successfully submitted."</p>
                </div>

                <div class="support-card submitted-card">
                    <h3>"Reference ID: "{reference_id}</h3>
                    <div class="submitted-details">
                        <h4>"What happens next?"</h4>
                        <ol>
                            <li>
                                "You will receive a confirmation email at "
                                <strong>{email}</strong>
                            </li>
                            <li>{deletion_step}</li>
                            <li>{final_step}</li>
                        </ol>
                        <p class="submitted-tip">{CONTACT_REFERENCE_TIP}</p>
                    </div>
                    <A href=SiteRoute::Home.path()>
                        <span class="btn btn-primary">"Back to Home"</span>
                    </A>
                </div>
            </div>
        </div>
    }
}
