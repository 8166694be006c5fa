use crate::page::component_library::section;
use crate::style::Style;
use crate::theme::Theme;
use crate::view::button::Button;
use crate::view::cell::{Cell, Row};
use crate::view::icon::Icon;
use crate::view::notification::{
    Attributes, Horizontal, Interaction, Notification, Variant, Vertical,
};
use seed::log;
use seed::prelude::Orders;

///////////////////////////////////////////////////////////////
// Types //
///////////////////////////////////////////////////////////////

/// Everything the notification itself refuses to own.
pub struct Model {
    open: bool,
    loaded: bool,
    keep_open_on_click: bool,
    with_end_icon: bool,
    top_left: bool,
    variant: Variant,
    times_acted: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    ClickedShow,
    ClickedToggleLoaded,
    ClickedToggleKeepOpen,
    ClickedToggleEndIcon,
    ClickedToggleAnchor,
    ClickedCycleVariant,
    Acted,
    Closed,
    Notification(Interaction),
}

///////////////////////////////////////////////////////////////
// Init //
///////////////////////////////////////////////////////////////

pub fn init() -> Model {
    Model {
        open: false,
        loaded: true,
        keep_open_on_click: false,
        with_end_icon: false,
        top_left: false,
        variant: Variant::Success,
        times_acted: 0,
    }
}

///////////////////////////////////////////////////////////////
// Helpers //
///////////////////////////////////////////////////////////////

fn attributes(model: &Model) -> Option<Attributes<Msg>> {
    if !model.loaded {
        return None;
    }

    let attributes = Attributes::new("Backup complete", Msg::Acted)
        .with_variant(model.variant)
        .with_start_icon(Icon::Done)
        .with_subtext("Uploads")
        .with_title("1,204 photos")
        .with_caption("All your photos are safe in the cloud");

    if model.with_end_icon {
        Some(attributes.with_end_icon(Icon::ArrowForward))
    } else {
        Some(attributes)
    }
}

fn notification(model: &Model) -> Notification<Msg> {
    let (horizontal, vertical) = if model.top_left {
        (Horizontal::Left, Vertical::Top)
    } else {
        (Horizontal::Right, Vertical::Bottom)
    };

    Notification::new(model.open, attributes(model), Msg::Closed, Msg::Notification)
        .keep_open_on_click(model.keep_open_on_click)
        .anchor(horizontal, vertical)
        .with_style("box-shadow", "0 4px 16px rgba(0, 0, 0, 0.4)")
}

fn on_off(label: &str, on: bool) -> String {
    let mut buf = label.to_string();
    buf.push_str(if on { ": on" } else { ": off" });
    buf
}

fn apply(msg: Msg, model: &mut Model) {
    match msg {
        Msg::ClickedShow => {
            model.open = true;
        }
        Msg::ClickedToggleLoaded => {
            model.loaded = !model.loaded;
        }
        Msg::ClickedToggleKeepOpen => {
            model.keep_open_on_click = !model.keep_open_on_click;
        }
        Msg::ClickedToggleEndIcon => {
            model.with_end_icon = !model.with_end_icon;
        }
        Msg::ClickedToggleAnchor => {
            model.top_left = !model.top_left;
        }
        Msg::ClickedCycleVariant => {
            model.variant = model.variant.next();
        }
        Msg::Acted => {
            model.times_acted += 1;
        }
        Msg::Closed => {
            model.open = false;
        }
        Msg::Notification(_) => {}
    }
}

///////////////////////////////////////////////////////////////
// Update //
///////////////////////////////////////////////////////////////

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Notification(interaction) => {
            notification(model).update(interaction, orders);
        }
        Msg::Acted | Msg::Closed => {
            log!("notification", msg);
            apply(msg, model);
        }
        _ => apply(msg, model),
    }
}

///////////////////////////////////////////////////////////////
// View //
///////////////////////////////////////////////////////////////

pub fn view(theme: &Theme, model: &Model) -> Vec<Row<Msg>> {
    let toggle = |label: &str, on: bool, msg: Msg| {
        Button::simple(on_off(label, on).as_str())
            .active(on)
            .on_click(move |_| msg)
            .cell()
    };

    let mut variant_text = "variant: ".to_string();
    variant_text.push_str(model.variant.label());

    let mut acted_text = "acted on ".to_string();
    acted_text.push_str(model.times_acted.to_string().as_str());
    acted_text.push_str(" times");

    vec![
        section::view(
            Some("notification"),
            Some(
                r#"
                    A dismissible snackbar. Clicking it acts and then closes it, unless it is set to stay open. The close button only closes. An end icon replaces the close button and only acts
                "#,
            ),
        ),
        vec![
            Row::from_cells(
                vec![Style::G3],
                vec![
                    Button::primary("show")
                        .on_click(|_| Msg::ClickedShow)
                        .cell(),
                    toggle("loaded", model.loaded, Msg::ClickedToggleLoaded),
                    toggle(
                        "keep open on click",
                        model.keep_open_on_click,
                        Msg::ClickedToggleKeepOpen,
                    ),
                    toggle("end icon", model.with_end_icon, Msg::ClickedToggleEndIcon),
                    toggle("top left", model.top_left, Msg::ClickedToggleAnchor),
                    Button::simple(variant_text.as_str())
                        .on_click(|_| Msg::ClickedCycleVariant)
                        .cell(),
                ],
            ),
            Row::from_cells(
                vec![],
                vec![Cell::from_str(vec![], acted_text.as_str())],
            ),
            Row::from_cells(
                vec![],
                vec![Cell::from_html(vec![], vec![notification(model).html(theme)])],
            ),
        ],
    ]
    .concat()
}

#[cfg(test)]
mod test_notification_section {
    use crate::page::component_library::notification::{apply, init, notification, Model, Msg};
    use crate::theme::ALL_VARIANTS;
    use crate::view::notification::Interaction;
    use pretty_assertions::assert_eq;

    fn interact(model: &mut Model, interaction: Interaction) {
        for msg in notification(model).respond(interaction) {
            apply(msg, model);
        }
    }

    #[test]
    fn cycles_open_and_closed() {
        let mut model = init();

        for _ in 0..3 {
            apply(Msg::ClickedShow, &mut model);
            assert!(model.open);

            interact(&mut model, Interaction::Close);
            assert!(!model.open);
        }

        assert_eq!(0, model.times_acted);
    }

    #[test]
    fn body_click_acts_and_closes() {
        let mut model = init();
        apply(Msg::ClickedShow, &mut model);

        interact(&mut model, Interaction::Body);

        assert_eq!(1, model.times_acted);
        assert!(!model.open);
    }

    #[test]
    fn body_click_stays_open_when_asked() {
        let mut model = init();
        apply(Msg::ClickedToggleKeepOpen, &mut model);
        apply(Msg::ClickedShow, &mut model);

        interact(&mut model, Interaction::Body);
        interact(&mut model, Interaction::Body);

        assert_eq!(2, model.times_acted);
        assert!(model.open);
    }

    #[test]
    fn end_icon_never_closes() {
        let mut model = init();
        apply(Msg::ClickedToggleEndIcon, &mut model);
        apply(Msg::ClickedShow, &mut model);

        interact(&mut model, Interaction::EndIcon);

        assert_eq!(1, model.times_acted);
        assert!(model.open);
    }

    #[test]
    fn variant_cycles_back_around() {
        let mut model = init();
        let start = model.variant;

        for _ in 0..ALL_VARIANTS.len() {
            apply(Msg::ClickedCycleVariant, &mut model);
        }

        assert_eq!(start, model.variant);
    }

    #[test]
    fn unloaded_notification_does_nothing() {
        let mut model = init();
        apply(Msg::ClickedToggleLoaded, &mut model);
        apply(Msg::ClickedShow, &mut model);

        interact(&mut model, Interaction::Body);
        interact(&mut model, Interaction::Close);

        assert_eq!(0, model.times_acted);
        assert!(model.open);
    }
}
