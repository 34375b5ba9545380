//! FAQ disclosure list. At most one answer is open at a time.

use leptos::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::FaqEntry;
use crate::state::FaqViewState;

#[component]
pub fn FaqList(entries: &'static [FaqEntry]) -> impl IntoView {
    let faq = RwSignal::new(FaqViewState::new());

    view! {
        <div class="faq-list">
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let is_open = move || faq.with(|state| state.is_expanded(index));
                    view! {
                        <div class="faq-item" class:open=is_open>
                            <button
                                type="button"
                                class="faq-question"
                                aria-expanded=move || is_open().to_string()
                                on:click=move |_| faq.update(|state| state.toggle(index))
                            >
                                <span>{entry.question}</span>
                                <Icon kind=IconKind::ChevronDown size=20 class="faq-chevron"/>
                            </button>
                            <Show when=is_open>
                                <div class="faq-answer">
                                    <p>{entry.answer}</p>
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
