use crate::view::text::text;
use seed::dom_entity_names::Tag;
use seed::prelude::{El, Node};
use std::borrow::Cow;

#[derive(Clone, Debug, PartialEq)]
pub enum Style {
    Batch(Vec<Style>),
    FlexCol,
    FlexRow,
    JustifyCenter,
    ItemsCenter,
    Grow,
    BorderR,
    Ellipsize,
    OverflowHidden,
    Overlay,
    Pointer,
    TextLeft,
    TextBold,
    TextSmall,
    TextContent5,
    P3,
    G1,
    G3,
    G4,
    WFull,
}

impl Style {
    pub fn css_classes(self) -> Vec<&'static str> {
        match self {
            Style::Batch(styles) => styles
                .into_iter()
                .map(|style| style.css_classes())
                .collect::<Vec<Vec<&'static str>>>()
                .concat(),
            Style::FlexCol => vec!["flex-col"],
            Style::FlexRow => vec!["flex-row"],
            Style::JustifyCenter => vec!["justify-center"],
            Style::ItemsCenter => vec!["items-center"],
            Style::Grow => vec!["grow"],
            Style::BorderR => vec!["border-r"],
            Style::Ellipsize => vec!["ellipsize"],
            Style::OverflowHidden => vec!["overflow-hidden"],
            Style::Overlay => vec!["overlay"],
            Style::Pointer => vec!["pointer"],
            Style::TextLeft => vec!["text-left"],
            Style::TextBold => vec!["text-bold"],
            Style::TextSmall => vec!["text-small"],
            Style::TextContent5 => vec!["text-content-5"],
            Style::P3 => vec!["p-3"],
            Style::G1 => vec!["g-1"],
            Style::G3 => vec!["g-3"],
            Style::G4 => vec!["g-4"],
            Style::WFull => vec!["w-full"],
        }
    }
}

const GLOBAL_STYLING: &str = include_str!("style.css");

pub fn global_html<Msg>() -> Node<Msg> {
    let mut element: El<Msg> = El::empty(Tag::Custom(Cow::Borrowed("style")));

    element.children.push(text(GLOBAL_STYLING));

    Node::Element(element)
}
