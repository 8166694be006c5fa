use crate::style::Style;
use crate::view::text::text;
use seed::dom_entity_names::Tag;
use seed::prelude::{mouse_ev, El, Ev, MessageMapper, Node};
use std::borrow::Cow;
use std::rc::Rc;
use web_sys::MouseEvent;

////////////////////////////////////////////////////////////////
// Types //
////////////////////////////////////////////////////////////////

#[derive(Clone)]
pub enum Cell<Msg> {
    None,
    Model(Model<Msg>),
}

#[derive(Clone)]
pub struct Model<Msg> {
    styles: Vec<Style>,
    children: Vec<Node<Msg>>,
    tag_name: &'static str,
    click_handler: Option<Rc<dyn Fn(MouseEvent) -> Msg>>,
    inline_styles: Vec<(&'static str, String)>,
    attrs: Vec<(&'static str, String)>,
}

#[derive(Clone)]
pub struct Row<Msg>(Cell<Msg>);

////////////////////////////////////////////////////////////////
// Helpers //
////////////////////////////////////////////////////////////////

const DEFAULT_TAG_NAME: &str = "cell";

const ROW_TAG_NAME: &str = "row";

const STRING_TAG_NAME: &str = "string";

fn inline_style_str(inline_styles: &[(&'static str, String)]) -> String {
    let mut buf = String::new();

    for (property, value) in inline_styles {
        buf.push_str(property);
        buf.push(':');
        buf.push_str(value.as_str());
        buf.push_str("; ");
    }

    buf
}

////////////////////////////////////////////////////////////////
// Api //
////////////////////////////////////////////////////////////////

impl<Msg: 'static> Row<Msg> {
    pub fn none() -> Row<Msg> {
        Row(Cell::none())
    }

    fn cell(self) -> Cell<Msg> {
        self.0
    }

    pub fn from_cells(mut styles: Vec<Style>, cells: Vec<Cell<Msg>>) -> Row<Msg> {
        styles.push(Style::FlexRow);

        Row(Cell::group(styles, cells).with_tag_name(ROW_TAG_NAME))
    }

    pub fn map_msg<OtherMsg: 'static>(
        self,
        f: impl FnOnce(Msg) -> OtherMsg + 'static + Clone,
    ) -> Row<OtherMsg> {
        Row(self.0.map_msg(f))
    }
}

impl<Msg: 'static> Cell<Msg> {
    pub fn none() -> Cell<Msg> {
        Cell::None
    }

    pub fn html(self) -> Node<Msg> {
        match self {
            Cell::None => Node::Empty,
            Cell::Model(model) => {
                let mut element: El<Msg> = El::empty(Tag::Custom(Cow::Borrowed(model.tag_name)));

                for style in model.styles {
                    for class in style.css_classes() {
                        element.add_class(class);
                    }
                }

                for (key, value) in model.attrs {
                    element.add_attr(Cow::Borrowed(key), value);
                }

                if !model.inline_styles.is_empty() {
                    element.add_attr(
                        Cow::Borrowed("style"),
                        inline_style_str(&model.inline_styles),
                    );
                }

                for child in model.children {
                    element.children.push(child);
                }

                if let Some(msg) = model.click_handler {
                    element.add_event_handler(mouse_ev(Ev::Click, move |event| msg(event)));
                }

                Node::Element(element)
            }
        }
    }

    pub fn with_tag_name(self, tag_name: &'static str) -> Cell<Msg> {
        match self {
            Cell::None => Cell::None,
            Cell::Model(mut model) => {
                model.tag_name = tag_name;

                Cell::Model(model)
            }
        }
    }

    pub fn with_styles(self, mut styles: Vec<Style>) -> Cell<Msg> {
        match self {
            Cell::None => Cell::None,
            Cell::Model(mut model) => {
                model.styles.append(&mut styles);
                Cell::Model(model)
            }
        }
    }

    /// Inline css, for values that come from the theme rather than
    /// from a class.
    pub fn with_inline_style(self, property: &'static str, value: &str) -> Cell<Msg> {
        match self {
            Cell::None => Cell::None,
            Cell::Model(mut model) => {
                model.inline_styles.push((property, value.to_string()));
                Cell::Model(model)
            }
        }
    }

    pub fn with_attr(self, key: &'static str, value: &str) -> Cell<Msg> {
        match self {
            Cell::None => Cell::None,
            Cell::Model(mut model) => {
                model.attrs.push((key, value.to_string()));
                Cell::Model(model)
            }
        }
    }

    pub fn on_click(self, msg: impl FnOnce(MouseEvent) -> Msg + Clone + 'static) -> Cell<Msg> {
        self.on_click_helper(Some(msg))
    }

    fn on_click_helper(
        self,
        maybe_msg: Option<impl FnOnce(MouseEvent) -> Msg + Clone + 'static>,
    ) -> Cell<Msg> {
        match self {
            Cell::None => Cell::None,
            Cell::Model(mut model) => match maybe_msg {
                Some(msg) => {
                    model.click_handler = Some(Rc::new(move |event| msg.clone()(event)));
                    Cell::Model(model)
                }
                None => Cell::Model(model),
            },
        }
    }

    #[cfg(test)]
    pub fn has_click_handler(&self) -> bool {
        match self {
            Cell::None => false,
            Cell::Model(model) => model.click_handler.is_some(),
        }
    }

    pub fn from_html(styles: Vec<Style>, html: Vec<Node<Msg>>) -> Cell<Msg> {
        Cell::new(styles, html, DEFAULT_TAG_NAME)
    }

    pub fn from_rows(mut styles: Vec<Style>, rows: Vec<Row<Msg>>) -> Cell<Msg> {
        let row_cells = rows.into_iter().map(|row| row.cell()).collect();

        styles.push(Style::FlexCol);

        Cell::group(styles, row_cells)
    }

    pub fn group(styles: Vec<Style>, children: Vec<Cell<Msg>>) -> Cell<Msg> {
        let html_children = children.into_iter().map(|cell| cell.html()).collect();

        Cell::new(styles, html_children, DEFAULT_TAG_NAME)
    }

    pub fn from_str(styles: Vec<Style>, text_content: &str) -> Cell<Msg> {
        Cell::new(styles, vec![text(text_content)], STRING_TAG_NAME)
    }

    pub fn map_msg<OtherMsg: 'static>(
        self,
        f: impl FnOnce(Msg) -> OtherMsg + 'static + Clone,
    ) -> Cell<OtherMsg> {
        match self {
            Cell::None => Cell::None,
            Cell::Model(model) => {
                let new_children = model
                    .children
                    .into_iter()
                    .map(|html| html.map_msg(f.clone()))
                    .collect();

                let new_on_click = model.click_handler.map(|msg| {
                    let msg_mapper = f.clone();
                    move |event| msg_mapper(msg(event))
                });

                Cell::Model(Model {
                    styles: model.styles,
                    children: new_children,
                    tag_name: model.tag_name,
                    click_handler: None,
                    inline_styles: model.inline_styles,
                    attrs: model.attrs,
                })
                .on_click_helper(new_on_click)
            }
        }
    }

    fn new(styles: Vec<Style>, children: Vec<Node<Msg>>, tag_name: &'static str) -> Cell<Msg> {
        Cell::Model(Model {
            styles,
            children,
            tag_name,
            click_handler: None,
            inline_styles: Vec::new(),
            attrs: Vec::new(),
        })
    }
}
