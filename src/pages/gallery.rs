//! Gallery page rendering a grid of template cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Demo surface for the card component: it owns the selection signal and the
//! active tag display mode, and feeds both back into the cards as plain
//! props. Clicking a card only updates the page-owned signal; the card
//! itself never toggles anything.

use leptos::prelude::*;

use crate::components::template_card::TemplateCard;
use crate::state::templates::{Tag, TagDetails, TagDisplayMode, TemplateSummary};

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Gallery page — a selectable grid of sample templates with a tag display
/// mode switcher.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let selected_id = RwSignal::new(None::<String>);
    let mode = RwSignal::new(TagDisplayMode::Label);

    let on_card_click =
        Callback::new(move |(_ev, template): (leptos::ev::MouseEvent, TemplateSummary)| {
            selected_id.set(template.id);
        });

    let templates = sample_templates();
    let selected_name = move || {
        let id = selected_id.get();
        sample_templates()
            .into_iter()
            .find(|t| t.id == id && id.is_some())
            .map_or_else(|| "none".to_owned(), |t| t.name)
    };

    view! {
        <div class="gallery-page">
            <header class="gallery-page__header toolbar">
                <span class="toolbar__title">"Templates"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <button
                    class="btn toolbar__mode"
                    class:btn--active=move || mode.get() == TagDisplayMode::Icon
                    on:click=move |_| mode.set(TagDisplayMode::Icon)
                >
                    "Icons"
                </button>
                <button
                    class="btn toolbar__mode"
                    class:btn--active=move || mode.get() == TagDisplayMode::Label
                    on:click=move |_| mode.set(TagDisplayMode::Label)
                >
                    "Badges"
                </button>
                <button
                    class="btn toolbar__mode"
                    class:btn--active=move || mode.get() == TagDisplayMode::Text
                    on:click=move |_| mode.set(TagDisplayMode::Text)
                >
                    "Text"
                </button>

                <span class="toolbar__spacer"></span>

                <span class="toolbar__selection">
                    "Selected: "
                    {selected_name}
                </span>
            </header>

            <div class="gallery-page__grid">
                {move || {
                    let active_mode = mode.get();
                    let active_id = selected_id.get();
                    templates
                        .clone()
                        .into_iter()
                        .map(|template| {
                            let is_active = is_selected(active_id.as_deref(), &template);
                            view! {
                                <TemplateCard
                                    template=template
                                    on_card_click=on_card_click
                                    selected=is_active
                                    show_tags=true
                                    tag_display=active_mode
                                    tags_title="Tags".to_owned()
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

/// A card is highlighted only when it has an id matching the selection.
fn is_selected(selected_id: Option<&str>, template: &TemplateSummary) -> bool {
    match (&template.id, selected_id) {
        (Some(id), Some(selected)) => id == selected,
        _ => false,
    }
}

fn detailed(name: &str, display_name: &str, logo: Option<&str>) -> Tag {
    Tag::Detailed(TagDetails {
        name: name.to_owned(),
        display_name: Some(display_name.to_owned()),
        logo: logo.map(ToOwned::to_owned),
    })
}

fn sample_templates() -> Vec<TemplateSummary> {
    vec![
        TemplateSummary {
            id: Some("nodejs-app".to_owned()),
            name: "Node.js Application".to_owned(),
            description: "Express-based web service with health checks preconfigured.".to_owned(),
            logo: Some("/logos/nodejs.svg".to_owned()),
            tags: Some(vec![
                detailed("nodejs", "Node.js", Some("/logos/nodejs.svg")),
                detailed("web", "Web", None),
            ]),
        },
        TemplateSummary {
            id: Some("postgres-db".to_owned()),
            name: "PostgreSQL Database".to_owned(),
            description: "Single-instance PostgreSQL with persistent storage.".to_owned(),
            logo: Some("/logos/postgresql.svg".to_owned()),
            tags: Some(vec![
                detailed("database", "Database", Some("/logos/database.svg")),
                detailed("sql", "SQL", None),
                detailed("storage", "Storage", None),
            ]),
        },
        TemplateSummary {
            id: Some("github-idp".to_owned()),
            name: "GitHub Identity Provider".to_owned(),
            description: "Sign-in via GitHub OAuth for your organization.".to_owned(),
            logo: Some("/logos/github.svg".to_owned()),
            tags: Some(vec![
                Tag::Plain("oauth".to_owned()),
                Tag::Plain("sso".to_owned()),
            ]),
        },
        TemplateSummary {
            id: Some("blank".to_owned()),
            name: "Blank Template".to_owned(),
            description: "Start from an empty project.".to_owned(),
            logo: None,
            tags: None,
        },
    ]
}
