use super::*;

fn plain(text: &str) -> Tag {
    Tag::Plain(text.to_owned())
}

fn detailed(name: &str, display_name: Option<&str>, logo: Option<&str>) -> TagDetails {
    TagDetails {
        name: name.to_owned(),
        display_name: display_name.map(ToOwned::to_owned),
        logo: logo.map(ToOwned::to_owned),
    }
}

#[test]
fn tags_hidden_when_visibility_flag_is_off() {
    let tags = vec![plain("a")];
    assert!(!tags_visible(false, &tags));
}

#[test]
fn tags_hidden_when_sequence_is_empty() {
    assert!(!tags_visible(true, &[]));
}

#[test]
fn tags_shown_when_visible_and_non_empty() {
    let tags = vec![plain("a")];
    assert!(tags_visible(true, &tags));
}

#[test]
fn single_tag_gets_no_separator() {
    assert_eq!(plain_tag_separator(0, 1), "");
    assert_eq!(detailed_tag_separator(0, 1), "");
}

#[test]
fn plain_separator_is_bare_comma_on_all_but_last() {
    assert_eq!(plain_tag_separator(0, 3), ",");
    assert_eq!(plain_tag_separator(1, 3), ",");
    assert_eq!(plain_tag_separator(2, 3), "");
}

#[test]
fn detailed_separator_is_comma_space_on_all_but_last() {
    assert_eq!(detailed_tag_separator(0, 3), ", ");
    assert_eq!(detailed_tag_separator(1, 3), ", ");
    assert_eq!(detailed_tag_separator(2, 3), "");
}

#[test]
fn detailed_tag_without_display_name_labels_by_name() {
    let details = detailed("db", None, None);
    assert_eq!(details.display_label(), "db");
}

#[test]
fn icon_mode_renders_tooltip_with_display_label() {
    let rendering = detailed_tag_rendering(
        detailed("db", Some("Database"), Some("/db.svg")),
        TagDisplayMode::Icon,
        0,
        2,
    );
    assert_eq!(
        rendering,
        TagRendering::IconTooltip {
            logo: "/db.svg".to_owned(),
            label: "Database".to_owned(),
        }
    );
}

#[test]
fn icon_mode_without_logo_falls_back_to_plain_label() {
    let rendering =
        detailed_tag_rendering(detailed("db", Some("Database"), None), TagDisplayMode::Icon, 0, 2);
    assert_eq!(
        rendering,
        TagRendering::Text {
            label: "Database".to_owned(),
            separator: "",
        }
    );
}

#[test]
fn label_mode_renders_badge_with_display_label() {
    let rendering =
        detailed_tag_rendering(detailed("db", Some("Database"), None), TagDisplayMode::Label, 1, 3);
    assert_eq!(
        rendering,
        TagRendering::Badge {
            label: "Database".to_owned(),
        }
    );
}

#[test]
fn text_mode_renders_label_with_comma_space_separator() {
    let first =
        detailed_tag_rendering(detailed("db", Some("Database"), None), TagDisplayMode::Text, 0, 2);
    assert_eq!(
        first,
        TagRendering::Text {
            label: "Database".to_owned(),
            separator: ", ",
        }
    );
    let last =
        detailed_tag_rendering(detailed("web", None, None), TagDisplayMode::Text, 1, 2);
    assert_eq!(
        last,
        TagRendering::Text {
            label: "web".to_owned(),
            separator: "",
        }
    );
}
