//! Helpers for poking at rendered virtual dom in tests.
use seed::prelude::*;

pub fn is_empty<Msg>(node: &Node<Msg>) -> bool {
    matches!(node, Node::Empty)
}

pub fn tag<Msg>(node: &Node<Msg>) -> Option<String> {
    match node {
        Node::Element(el) => match &el.tag {
            Tag::Custom(name) => Some(name.to_string()),
            other => Some(format!("{:?}", other).to_lowercase()),
        },
        _ => None,
    }
}

pub fn attr<Msg>(node: &Node<Msg>, key: &str) -> Option<String> {
    match node {
        Node::Element(el) => el
            .attrs
            .vals
            .iter()
            .find(|(at, _)| at.as_str() == key)
            .and_then(|(_, value)| match value {
                AtValue::Some(value) => Some(value.clone()),
                _ => None,
            }),
        _ => None,
    }
}

pub fn classes<Msg>(node: &Node<Msg>) -> Option<String> {
    attr(node, "class")
}

pub fn has_class<Msg>(node: &Node<Msg>, class: &str) -> bool {
    classes(node)
        .map(|classes| classes.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

pub fn children<Msg>(node: &Node<Msg>) -> Vec<&Node<Msg>> {
    match node {
        Node::Element(el) => el.children.iter().collect(),
        _ => vec![],
    }
}

/// Depth first, including `node` itself.
pub fn find_by_class<'a, Msg>(node: &'a Node<Msg>, class: &str) -> Vec<&'a Node<Msg>> {
    let mut found = Vec::new();

    if has_class(node, class) {
        found.push(node);
    }

    for child in children(node) {
        found.append(&mut find_by_class(child, class));
    }

    found
}

pub fn texts<Msg>(node: &Node<Msg>) -> Vec<String> {
    match node {
        Node::Text(text) if !text.text.is_empty() => vec![text.text.to_string()],
        Node::Element(el) => el.children.iter().flat_map(|child| texts(child)).collect(),
        _ => vec![],
    }
}
