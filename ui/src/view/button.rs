use crate::route;
use crate::view::cell::Cell;
use crate::view::icon::Icon;
use crate::view::text::text;
use seed::dom_entity_names::Tag;
use seed::prelude::*;
use seed::prelude::{El, Node};
use std::borrow::Cow;
use std::rc::Rc;
use web_sys::MouseEvent;

////////////////////////////////////////////////////////////////
// Types //
////////////////////////////////////////////////////////////////

pub struct Button<Msg: 'static> {
    content: Content,
    on_click: Click<Msg>,
    active: bool,
    variant: Variant,
    class: Option<&'static str>,
    background: Option<&'static str>,
    stop_propagation: bool,
}

enum Content {
    Label(String),
    Icon(Icon),
}

enum Variant {
    Simple,
    Primary,
    Icon,
}

enum Click<Msg> {
    NoClick,
    Handler(Rc<dyn Fn(MouseEvent) -> Msg>),
    Route(route::Route),
}

////////////////////////////////////////////////////////////////
// Helpers //
////////////////////////////////////////////////////////////////

impl Variant {
    fn to_css_class(&self) -> &'static str {
        match self {
            Variant::Simple => "button-simple",
            Variant::Primary => "button-primary",
            Variant::Icon => "button-icon",
        }
    }
}

// The message is made before the event is stopped, so the handler
// still sees the event as it arrived.
fn handle_click<Msg>(
    on_click: &Rc<dyn Fn(MouseEvent) -> Msg>,
    stop_propagation: bool,
    event: MouseEvent,
) -> Msg {
    let msg = on_click(event.clone());

    if stop_propagation {
        event.stop_propagation();
    }

    msg
}

////////////////////////////////////////////////////////////////
// Api //
////////////////////////////////////////////////////////////////

impl<Msg: 'static> Button<Msg> {
    fn from_variant(content: Content, variant: Variant) -> Button<Msg> {
        Button {
            content,
            on_click: Click::NoClick,
            active: false,
            variant,
            class: None,
            background: None,
            stop_propagation: false,
        }
    }
    pub fn primary(label: &str) -> Button<Msg> {
        Button::from_variant(Content::Label(label.to_string()), Variant::Primary)
    }
    pub fn simple(label: &str) -> Button<Msg> {
        Button::from_variant(Content::Label(label.to_string()), Variant::Simple)
    }
    /// Round, filled button holding just an icon
    pub fn icon(icon: Icon) -> Button<Msg> {
        Button::from_variant(Content::Icon(icon), Variant::Icon)
    }
    pub fn active(mut self, active: bool) -> Button<Msg> {
        self.active = active;
        self
    }
    pub fn route(mut self, route: route::Route) -> Button<Msg> {
        self.on_click = Click::Route(route);
        self
    }
    pub fn on_click(
        mut self,
        on_click: impl FnOnce(MouseEvent) -> Msg + Clone + 'static,
    ) -> Button<Msg> {
        self.on_click = Click::Handler(Rc::new(move |event| on_click.clone()(event)));
        self
    }
    pub fn with_class(mut self, class: &'static str) -> Button<Msg> {
        self.class = Some(class);
        self
    }
    pub fn with_background(mut self, color: &'static str) -> Button<Msg> {
        self.background = Some(color);
        self
    }
    /// Keeps the click from reaching anything the button sits inside.
    pub fn stop_propagation(mut self) -> Button<Msg> {
        self.stop_propagation = true;
        self
    }
    #[cfg(test)]
    pub fn stops_propagation(&self) -> bool {
        self.stop_propagation
    }
    pub fn cell(self) -> Cell<Msg> {
        Cell::from_html(vec![], vec![self.html()])
    }
    pub fn html(self) -> Node<Msg> {
        let tag = match self.on_click {
            Click::Route(_) => "a",
            _ => "button",
        };

        let mut element: El<Msg> = El::empty(Tag::Custom(Cow::Borrowed(tag)));

        element.add_class("button");

        element.add_class(self.variant.to_css_class());

        if let Some(class) = self.class {
            element.add_class(class);
        }

        if self.active {
            element.add_class("active");
        }

        if let Some(background) = self.background {
            let mut style = "background-color:".to_string();
            style.push_str(background);
            element.add_attr(Cow::Borrowed("style"), style);
        }

        match self.content {
            Content::Label(label) => element.children.push(text(label.as_str())),
            Content::Icon(icon) => element.children.push(icon.html()),
        }

        match self.on_click {
            Click::Handler(on_click) => {
                let stop_propagation = self.stop_propagation;

                element.add_event_handler(mouse_ev(Ev::Click, move |event| {
                    handle_click(&on_click, stop_propagation, event)
                }));
            }
            Click::Route(route) => {
                element.add_attr(Cow::Borrowed("href"), route.to_string());
            }
            Click::NoClick => {}
        }

        Node::Element(element)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod test_button_in_browser {
    use crate::view::button::handle_click;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::MouseEvent;

    wasm_bindgen_test_configure!(run_in_browser);

    fn on_click() -> Rc<dyn Fn(MouseEvent) -> u8> {
        Rc::new(|_| 7)
    }

    #[wasm_bindgen_test]
    fn stopped_clicks_send_their_message_and_cancel_bubbling() {
        let event = MouseEvent::new("click").unwrap();

        assert_eq!(7, handle_click(&on_click(), true, event.clone()));
        assert!(event.cancel_bubble());
    }

    #[wasm_bindgen_test]
    fn plain_clicks_keep_bubbling() {
        let event = MouseEvent::new("click").unwrap();

        assert_eq!(7, handle_click(&on_click(), false, event.clone()));
        assert!(!event.cancel_bubble());
    }
}
