//! Clickable template card: logo, title, description, and optional tags.
//!
//! DESIGN
//! ======
//! Keeps template tiles consistent across gallery surfaces while leaving all
//! selection state with the caller: the card forwards clicks together with
//! its descriptor and renders whatever `selected`/`disabled` flags the host
//! passes on the next render. Every sub-element carries a stable
//! `data-testid` derived from the card's base test id.

use leptos::prelude::*;

use crate::components::tag_list::TagSection;
use crate::state::templates::{TagDisplayMode, TemplateSummary, TextAlign};

#[cfg(test)]
#[path = "template_card_test.rs"]
mod template_card_test;

/// A clickable card representing a selectable template.
#[component]
pub fn TemplateCard(
    template: TemplateSummary,
    on_card_click: Callback<(leptos::ev::MouseEvent, TemplateSummary)>,
    #[prop(optional)] selected: bool,
    #[prop(optional)] disabled: bool,
    #[prop(default = true)] inline: bool,
    #[prop(default = TextAlign::Center)] text_align: TextAlign,
    #[prop(default = TagDisplayMode::Label)] tag_display: TagDisplayMode,
    #[prop(optional)] show_tags: bool,
    #[prop(optional)] tags_title: Option<String>,
    #[prop(optional)] show_tag_glyph: bool,
    #[prop(default = 40)] logo_size: u32,
    #[prop(optional)] logo_alt: Option<String>,
    #[prop(optional)] class: Option<String>,
    #[prop(default = "template-card".to_owned())] test_id: String,
) -> impl IntoView {
    let modifiers = CardModifiers {
        disabled,
        inline,
        selected,
        has_image: template.logo.is_some(),
        align: text_align,
    };
    let root_class = card_class(&modifiers, class.as_deref());

    let root_test_id = test_id.clone();
    let logo_test_id = child_test_id(&test_id, "logo");
    let header_test_id = child_test_id(&test_id, "header");
    let description_test_id = child_test_id(&test_id, "description");

    let payload = template.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| on_card_click.run((ev, payload.clone()));

    let TemplateSummary { name, description, logo, tags, .. } = template;
    let alt = logo_alt.unwrap_or_else(|| name.clone());

    view! {
        <div class=root_class data-testid=root_test_id on:click=on_click>
            {logo.map(|src| view! {
                <div class="template-card__logo" data-testid=logo_test_id>
                    <img
                        class="template-card__logo-image"
                        src=src
                        alt=alt
                        width=logo_size.to_string()
                        height=logo_size.to_string()
                    />
                </div>
            })}
            <div class="template-card__body">
                <h3 class="template-card__header" data-testid=header_test_id>{name}</h3>
                <p class="template-card__description" data-testid=description_test_id>
                    {description}
                </p>
                <TagSection
                    tags=tags.unwrap_or_default()
                    visible=show_tags
                    mode=tag_display
                    title=tags_title.unwrap_or_default()
                    show_glyph=show_tag_glyph
                    test_id=test_id
                />
            </div>
        </div>
    }
}

/// Visual state flags folded into the card's class string.
struct CardModifiers {
    disabled: bool,
    inline: bool,
    selected: bool,
    has_image: bool,
    align: TextAlign,
}

/// Merge the fixed base class with state modifiers and caller extras.
fn card_class(modifiers: &CardModifiers, extra: Option<&str>) -> String {
    let mut classes = String::from("template-card");
    if modifiers.disabled {
        classes.push_str(" template-card--disabled");
    }
    if modifiers.inline {
        classes.push_str(" template-card--inline");
    }
    if modifiers.selected {
        classes.push_str(" template-card--selected");
    }
    if modifiers.has_image {
        classes.push_str(" template-card--has-image");
    }
    classes.push_str(align_modifier(modifiers.align));
    if let Some(extra) = extra {
        let extra = extra.trim();
        if !extra.is_empty() {
            classes.push(' ');
            classes.push_str(extra);
        }
    }
    classes
}

fn align_modifier(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => " template-card--align-left",
        TextAlign::Center => " template-card--align-center",
        TextAlign::Right => " template-card--align-right",
    }
}

/// Stable test id for a card sub-element: base id plus a fixed suffix.
pub(crate) fn child_test_id(base: &str, suffix: &str) -> String {
    format!("{base}-{suffix}")
}
