//! Tag section of a template card: badges, icons, or comma-joined text.
//!
//! DESIGN
//! ======
//! The section is a stateless mapping from the tag sequence and display mode
//! to markup. When the section is not shown, a hidden divider keeps the
//! card's vertical rhythm so neighbouring cards line up. Separator rules
//! differ between plain-string tags (bare ",") and structured tags in text
//! mode (", "); that asymmetry is intentional and matched by callers' CSS.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::template_card::child_test_id;
use crate::state::templates::{Tag, TagDetails, TagDisplayMode};

#[cfg(test)]
#[path = "tag_list_test.rs"]
mod tag_list_test;

/// Tag section of a card: either the rendered tag list or a spacing
/// placeholder when hidden or empty.
#[component]
pub fn TagSection(
    #[prop(optional)] tags: Vec<Tag>,
    #[prop(optional)] visible: bool,
    #[prop(default = TagDisplayMode::Label)] mode: TagDisplayMode,
    #[prop(optional)] title: String,
    #[prop(optional)] show_glyph: bool,
    #[prop(default = "template-card".to_owned())] test_id: String,
) -> impl IntoView {
    if !tags_visible(visible, &tags) {
        return view! {
            <hr class="template-card__divider template-card__divider--hidden" aria-hidden="true"/>
        }
        .into_any();
    }

    let count = tags.len();
    let tags_test_id = child_test_id(&test_id, "tags");

    view! {
        <div class="template-card__tags" data-testid=tags_test_id>
            {(!title.is_empty())
                .then(|| view! { <span class="template-card__tags-title">{title}</span> })}
            <span class="template-card__tag-list">
                {show_glyph
                    .then(|| view! { <span class="template-card__tag-glyph" aria-hidden="true">"⚑"</span> })}
                {tags
                    .into_iter()
                    .enumerate()
                    .map(|(index, tag)| tag_view(tag, mode, index, count))
                    .collect::<Vec<_>>()}
            </span>
        </div>
    }
    .into_any()
}

fn tag_view(tag: Tag, mode: TagDisplayMode, index: usize, count: usize) -> AnyView {
    match tag {
        // Plain string tags ignore the display mode.
        Tag::Plain(text) => {
            let separator = plain_tag_separator(index, count);
            view! {
                <span class="template-card__tag template-card__tag--plain">{text}{separator}</span>
            }
            .into_any()
        }
        Tag::Detailed(details) => {
            detailed_tag_view(detailed_tag_rendering(details, mode, index, count))
        }
    }
}

/// What a structured tag renders as, decided before any markup is built.
#[derive(Debug, PartialEq, Eq)]
enum TagRendering {
    /// Logo icon wrapped in a hover tooltip carrying the label.
    IconTooltip { logo: String, label: String },
    /// Label inside a compact badge.
    Badge { label: String },
    /// Label as text with a trailing separator.
    Text { label: String, separator: &'static str },
}

fn detailed_tag_rendering(
    details: TagDetails,
    mode: TagDisplayMode,
    index: usize,
    count: usize,
) -> TagRendering {
    let label = details.display_label().to_owned();
    match mode {
        TagDisplayMode::Icon => match details.logo {
            Some(logo) => TagRendering::IconTooltip { logo, label },
            // No logo to show: degrade to the label as text.
            None => TagRendering::Text { label, separator: "" },
        },
        TagDisplayMode::Label => TagRendering::Badge { label },
        TagDisplayMode::Text => TagRendering::Text {
            label,
            separator: detailed_tag_separator(index, count),
        },
    }
}

fn detailed_tag_view(rendering: TagRendering) -> AnyView {
    match rendering {
        TagRendering::IconTooltip { logo, label } => view! {
            <span class="template-card__tag tag-tooltip">
                <img class="tag-tooltip__icon" src=logo alt=label.clone()/>
                <span class="tag-tooltip__text" role="tooltip">{label}</span>
            </span>
        }
        .into_any(),
        TagRendering::Badge { label } => {
            view! { <span class="template-card__tag tag-badge">{label}</span> }.into_any()
        }
        TagRendering::Text { label, separator } => {
            view! { <span class="template-card__tag">{label}{separator}</span> }.into_any()
        }
    }
}

/// The tags section renders only when requested and the sequence is
/// non-empty. An absent sequence reaches this as an empty slice.
fn tags_visible(visible: bool, tags: &[Tag]) -> bool {
    visible && !tags.is_empty()
}

/// Separator after a plain string tag: bare comma, none after the last.
fn plain_tag_separator(index: usize, count: usize) -> &'static str {
    if count > 1 && index + 1 < count { "," } else { "" }
}

/// Separator after a structured tag in text mode: comma and space, none
/// after the last.
fn detailed_tag_separator(index: usize, count: usize) -> &'static str {
    if count > 1 && index + 1 < count { ", " } else { "" }
}
