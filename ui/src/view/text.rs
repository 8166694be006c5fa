use crate::style::Style;
use crate::view::cell::Cell;
use seed::prelude::Node;
use seed::virtual_dom::Text;

pub fn text<Msg>(str: &str) -> Node<Msg> {
    let node_text: Text = Text::new(str.to_string());
    Node::Text(node_text)
}

/// Single line of text that is cut off with an ellipsis rather than
/// wrapping. Whatever contains it needs `Style::OverflowHidden`.
pub fn ellipsized<Msg: 'static>(mut styles: Vec<Style>, text_content: &str) -> Cell<Msg> {
    styles.push(Style::Ellipsize);

    Cell::from_str(styles, text_content)
}
