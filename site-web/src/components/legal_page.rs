//! # Legal Page
//!
//! Renders a [`LegalDocument`]: title, "Last updated" line, numbered sections
//! and the closing notice.

use leptos::prelude::*;

use crate::content::legal::{Block, ContactValue, LegalDocument, ListItem};
use crate::utils::format::{format_en_gb_date, today};

#[component]
pub fn LegalPage(document: &'static LegalDocument) -> impl IntoView {
    let last_updated = format_en_gb_date(today());

    view! {
        <div class="legal-page">
            <div class="container">
                <div class="legal-content">
                    <h1>{document.title}</h1>
                    <p class="legal-updated">
                        <strong>"Last updated:"</strong>
                        " "
                        {last_updated}
                    </p>

                    {document
                        .sections
                        .iter()
                        .map(|section| {
                            view! {
                                <section>
                                    <h2>{section.heading}</h2>
                                    {section.blocks.iter().map(render_block).collect_view()}
                                </section>
                            }
                        })
                        .collect_view()}

                    <div class="legal-notice">
                        <p>
                            <strong>{document.notice.label}</strong>
                            " "
                            {document.notice.text}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn render_block(block: &'static Block) -> AnyView {
    match block {
        Block::Paragraph(text) => view! { <p>{*text}</p> }.into_any(),
        Block::Subheading(text) => view! { <h3>{*text}</h3> }.into_any(),
        Block::List(items) => view! {
            <ul>{items.iter().map(render_list_item).collect_view()}</ul>
        }
        .into_any(),
        Block::EmailLine { text, email } => view! {
            <p>
                {*text}
                " "
                <a href=format!("mailto:{}", email)>{*email}</a>
                "."
            </p>
        }
        .into_any(),
        Block::ContactBox(lines) => view! {
            <div class="contact-box">
                {lines
                    .iter()
                    .map(|line| {
                        let value = match line.value {
                            ContactValue::Email(email) => view! {
                                <a href=format!("mailto:{}", email)>{email}</a>
                            }
                            .into_any(),
                            ContactValue::Text(text) => text.into_any(),
                        };
                        view! {
                            <p>
                                <strong>{line.label}</strong>
                                " "
                                {value}
                            </p>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

fn render_list_item(item: &'static ListItem) -> impl IntoView {
    view! {
        <li>
            {item.lead.map(|lead| view! { <strong>{lead}</strong>" " })}
            {item.text}
        </li>
    }
}
