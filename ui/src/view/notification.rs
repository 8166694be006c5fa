use crate::style::Style;
use crate::theme::Theme;
use crate::view::button::Button;
use crate::view::cell::Cell;
use crate::view::icon::Icon;
use crate::view::text::ellipsized;
use seed::prelude::{Node, Orders};
use std::rc::Rc;

pub use crate::theme::Variant;

////////////////////////////////////////////////////////////////
// Types //
////////////////////////////////////////////////////////////////

/// What a notification shows, and the message to send when the
/// notification is acted on. Built fresh by the caller every render.
#[derive(Clone)]
pub struct Attributes<Msg> {
    pub variant: Variant,
    pub message: String,
    pub title: Option<String>,
    pub subtext: Option<String>,
    pub caption: Option<String>,
    pub start_icon: Option<Icon>,
    pub end_icon: Option<Icon>,
    pub on_click: Msg,
}

/// A dismissible snackbar. Whether it is open belongs to the caller;
/// the notification only ever asks to be closed by sending `on_close`.
///
/// Dom handlers can only send one message, so they send an
/// `Interaction`, and the caller turns that back into its own messages
/// with `respond` (or `update`).
pub struct Notification<Msg: 'static> {
    open: bool,
    attributes: Option<Attributes<Msg>>,
    on_close: Msg,
    on_interaction: Rc<dyn Fn(Interaction) -> Msg>,
    keep_open_on_click: bool,
    horizontal: Horizontal,
    vertical: Vertical,
    style_overrides: Vec<(&'static str, String)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Body,
    Close,
    EndIcon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vertical {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Emphasis {
    Bold,
    Small,
}

////////////////////////////////////////////////////////////////
// Helpers //
////////////////////////////////////////////////////////////////

const TAG_NAME: &str = "notification";

const BODY_TAG_NAME: &str = "notification-body";

const ICON_TAG_NAME: &str = "notification-icon";

const TEXT_TAG_NAME: &str = "notification-text";

pub const CLOSE_CLASS: &str = "notification-close";

pub const ACTION_CLASS: &str = "notification-action";

const WIDTH: &str = "320px";

const BACKGROUND: &str = "#000";

impl Default for Horizontal {
    fn default() -> Horizontal {
        Horizontal::Right
    }
}

impl Default for Vertical {
    fn default() -> Vertical {
        Vertical::Bottom
    }
}

impl Horizontal {
    fn css_property(self) -> &'static str {
        match self {
            Horizontal::Left => "left",
            Horizontal::Right => "right",
        }
    }
}

impl Vertical {
    fn css_property(self) -> &'static str {
        match self {
            Vertical::Top => "top",
            Vertical::Bottom => "bottom",
        }
    }
}

impl Emphasis {
    fn styles(self) -> Vec<Style> {
        match self {
            Emphasis::Bold => vec![Style::TextBold],
            Emphasis::Small => vec![Style::TextSmall],
        }
    }
}

fn non_empty(maybe_text: &Option<String>) -> Option<&str> {
    maybe_text
        .as_deref()
        .filter(|text_content| !text_content.is_empty())
}

/// The button at the end of the notification, and what clicking it
/// means. An end icon takes the place of the close button.
fn trailing_action(end_icon: Option<Icon>) -> (Icon, &'static str, Interaction) {
    match end_icon {
        Some(end_icon) => (end_icon, ACTION_CLASS, Interaction::EndIcon),
        None => (Icon::Close, CLOSE_CLASS, Interaction::Close),
    }
}

// The click is stopped at the button, so it never also counts as a
// click on the body.
fn trailing_button<Msg: 'static>(
    theme: &Theme,
    end_icon: Option<Icon>,
    on_interaction: Rc<dyn Fn(Interaction) -> Msg>,
) -> Button<Msg> {
    let (icon, class, interaction) = trailing_action(end_icon);

    Button::icon(icon)
        .with_class(class)
        .with_background(theme.fill.faint)
        .on_click(move |_| on_interaction(interaction))
        .stop_propagation()
}

////////////////////////////////////////////////////////////////
// Api //
////////////////////////////////////////////////////////////////

impl<Msg> Attributes<Msg> {
    pub fn new(message: &str, on_click: Msg) -> Attributes<Msg> {
        Attributes {
            variant: Variant::Neutral,
            message: message.to_string(),
            title: None,
            subtext: None,
            caption: None,
            start_icon: None,
            end_icon: None,
            on_click,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Attributes<Msg> {
        self.variant = variant;
        self
    }

    pub fn with_title(mut self, title: &str) -> Attributes<Msg> {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_subtext(mut self, subtext: &str) -> Attributes<Msg> {
        self.subtext = Some(subtext.to_string());
        self
    }

    pub fn with_caption(mut self, caption: &str) -> Attributes<Msg> {
        self.caption = Some(caption.to_string());
        self
    }

    pub fn with_start_icon(mut self, icon: Icon) -> Attributes<Msg> {
        self.start_icon = Some(icon);
        self
    }

    pub fn with_end_icon(mut self, icon: Icon) -> Attributes<Msg> {
        self.end_icon = Some(icon);
        self
    }

    pub fn start_icon_or_default(&self) -> Icon {
        self.start_icon.unwrap_or(Icon::Info)
    }

    fn lines(&self) -> Vec<(&str, Emphasis)> {
        let message = if self.message.is_empty() {
            None
        } else {
            Some(self.message.as_str())
        };

        vec![
            (non_empty(&self.subtext), Emphasis::Small),
            (message, Emphasis::Bold),
            (non_empty(&self.title), Emphasis::Bold),
            (non_empty(&self.caption), Emphasis::Small),
        ]
        .into_iter()
        .filter_map(|(maybe_line, emphasis)| maybe_line.map(|line| (line, emphasis)))
        .collect()
    }
}

impl<Msg: 'static> Notification<Msg> {
    pub fn new(
        open: bool,
        attributes: Option<Attributes<Msg>>,
        on_close: Msg,
        on_interaction: impl Fn(Interaction) -> Msg + 'static,
    ) -> Notification<Msg> {
        Notification {
            open,
            attributes,
            on_close,
            on_interaction: Rc::new(on_interaction),
            keep_open_on_click: false,
            horizontal: Horizontal::default(),
            vertical: Vertical::default(),
            style_overrides: Vec::new(),
        }
    }

    pub fn keep_open_on_click(mut self, keep_open_on_click: bool) -> Notification<Msg> {
        self.keep_open_on_click = keep_open_on_click;
        self
    }

    pub fn anchor(mut self, horizontal: Horizontal, vertical: Vertical) -> Notification<Msg> {
        self.horizontal = horizontal;
        self.vertical = vertical;
        self
    }

    /// Overrides one css property of the outer surface, like its
    /// width or background.
    pub fn with_style(mut self, property: &'static str, value: &str) -> Notification<Msg> {
        self.style_overrides.push((property, value.to_string()));
        self
    }

    pub fn html(self, theme: &Theme) -> Node<Msg> {
        self.cell(theme).html()
    }

    pub fn cell(self, theme: &Theme) -> Cell<Msg> {
        let attributes = match self.attributes {
            None => return Cell::none(),
            Some(attributes) => attributes,
        };

        if !self.open {
            return Cell::none();
        }

        let colors = theme.variant_colors(attributes.variant);

        let start_icon = Cell::from_html(vec![], vec![attributes.start_icon_or_default().html()])
            .with_tag_name(ICON_TAG_NAME);

        let lines = attributes
            .lines()
            .into_iter()
            .map(|(line, emphasis)| ellipsized(emphasis.styles(), line))
            .collect();

        let text_column = Cell::group(
            vec![
                Style::FlexCol,
                Style::Grow,
                Style::OverflowHidden,
                Style::TextLeft,
                Style::G1,
            ],
            lines,
        )
        .with_tag_name(TEXT_TAG_NAME);

        let trailing = trailing_button(
            theme,
            attributes.end_icon,
            self.on_interaction.clone(),
        );

        let content_row = Cell::group(
            vec![Style::FlexRow, Style::ItemsCenter, Style::G4, Style::WFull],
            vec![start_icon, text_column, trailing.cell()],
        );

        let on_interaction = self.on_interaction;

        let body = Cell::group(vec![Style::Pointer, Style::TextLeft], vec![content_row])
            .with_tag_name(BODY_TAG_NAME)
            .with_attr("role", "button")
            .with_attr("tabindex", "0")
            .with_inline_style("padding", theme.spacing(&[1.5, 2.0]).as_str())
            .with_inline_style("border-radius", "8px")
            .with_inline_style("background-color", colors.background)
            .with_inline_style("color", colors.text)
            .on_click(move |_| on_interaction(Interaction::Body));

        let offset = theme.spacing(&[3.0]);

        let mut surface = Cell::group(vec![], vec![body])
            .with_tag_name(TAG_NAME)
            .with_attr("role", "alert")
            .with_inline_style(self.vertical.css_property(), offset.as_str())
            .with_inline_style(self.horizontal.css_property(), offset.as_str())
            .with_inline_style("width", WIDTH)
            .with_inline_style("background-color", BACKGROUND);

        // Later declarations win, so overrides go last.
        for (property, value) in self.style_overrides {
            surface = surface.with_inline_style(property, value.as_str());
        }

        surface
    }
}

impl<Msg: Clone + 'static> Notification<Msg> {
    /// The caller messages an interaction stands for, in the order they
    /// should be handled.
    pub fn respond(&self, interaction: Interaction) -> Vec<Msg> {
        let attributes = match &self.attributes {
            None => return vec![],
            Some(attributes) => attributes,
        };

        match interaction {
            Interaction::Body => {
                let mut msgs = vec![attributes.on_click.clone()];

                if !self.keep_open_on_click {
                    msgs.push(self.on_close.clone());
                }

                msgs
            }
            Interaction::Close => vec![self.on_close.clone()],
            Interaction::EndIcon => match attributes.end_icon {
                Some(_) => vec![attributes.on_click.clone()],
                None => vec![],
            },
        }
    }

    pub fn update(&self, interaction: Interaction, orders: &mut impl Orders<Msg>) {
        for msg in self.respond(interaction) {
            orders.send_msg(msg);
        }
    }
}

#[cfg(test)]
mod test_notification {
    use crate::theme::Theme;
    use crate::view::button::Button;
    use crate::view::icon::Icon;
    use crate::view::inspect;
    use crate::view::notification::{
        trailing_action, trailing_button, Attributes, Horizontal, Interaction, Notification,
        Variant, ACTION_CLASS, CLOSE_CLASS,
    };
    use std::rc::Rc;
    use pretty_assertions::assert_eq;
    use seed::prelude::Node;

    #[derive(Clone, Debug, PartialEq)]
    enum Msg {
        BackupOpened,
        Closed,
        Interacted(Interaction),
    }

    const ALL_INTERACTIONS: [Interaction; 3] =
        [Interaction::Body, Interaction::Close, Interaction::EndIcon];

    fn backup_complete() -> Attributes<Msg> {
        Attributes::new("Backup complete", Msg::BackupOpened).with_variant(Variant::Success)
    }

    fn open(attributes: Attributes<Msg>) -> Notification<Msg> {
        Notification::new(true, Some(attributes), Msg::Closed, Msg::Interacted)
    }

    fn render(notification: Notification<Msg>) -> Node<Msg> {
        render_with(notification, &Theme::dark())
    }

    fn render_with(notification: Notification<Msg>, theme: &Theme) -> Node<Msg> {
        notification.html(theme)
    }

    fn data_icons(node: &Node<Msg>) -> Vec<String> {
        inspect::find_by_class(node, "icon")
            .into_iter()
            .filter_map(|icon| inspect::attr(icon, "data-icon"))
            .collect()
    }

    #[test]
    fn missing_attributes_render_nothing() {
        let notification: Notification<Msg> =
            Notification::new(true, None, Msg::Closed, Msg::Interacted);

        for interaction in ALL_INTERACTIONS.iter() {
            assert_eq!(Vec::<Msg>::new(), notification.respond(*interaction));
        }

        assert!(inspect::is_empty(&render(notification)));
    }

    #[test]
    fn closed_renders_nothing() {
        let notification = Notification::new(
            false,
            Some(backup_complete()),
            Msg::Closed,
            Msg::Interacted,
        );

        assert!(inspect::is_empty(&render(notification)));
    }

    #[test]
    fn body_click_acts_then_closes() {
        assert_eq!(
            vec![Msg::BackupOpened, Msg::Closed],
            open(backup_complete()).respond(Interaction::Body)
        );
    }

    #[test]
    fn body_click_can_keep_it_open() {
        let notification = open(backup_complete()).keep_open_on_click(true);

        assert_eq!(
            vec![Msg::BackupOpened],
            notification.respond(Interaction::Body)
        );
    }

    #[test]
    fn close_only_closes() {
        assert_eq!(
            vec![Msg::Closed],
            open(backup_complete()).respond(Interaction::Close)
        );
        assert_eq!(
            vec![Msg::Closed],
            open(backup_complete())
                .keep_open_on_click(true)
                .respond(Interaction::Close)
        );
    }

    #[test]
    fn end_icon_acts_without_closing() {
        let notification = open(backup_complete().with_end_icon(Icon::ArrowForward));

        assert_eq!(
            vec![Msg::BackupOpened],
            notification.respond(Interaction::EndIcon)
        );
    }

    #[test]
    fn end_icon_replaces_close_button() {
        let node = render(open(backup_complete().with_end_icon(Icon::ArrowForward)));

        assert!(inspect::find_by_class(&node, CLOSE_CLASS).is_empty());

        let actions = inspect::find_by_class(&node, ACTION_CLASS);
        assert_eq!(1, actions.len());
        assert_eq!(vec!["arrow-forward".to_string()], data_icons(actions[0]));
    }

    #[test]
    fn close_button_closes_without_acting() {
        let (icon, class, interaction) = trailing_action(None);

        assert_eq!((Icon::Close, CLOSE_CLASS), (icon, class));
        assert_eq!(vec![Msg::Closed], open(backup_complete()).respond(interaction));
    }

    #[test]
    fn end_icon_button_acts_without_closing() {
        let (icon, class, interaction) = trailing_action(Some(Icon::ArrowForward));
        let notification = open(backup_complete().with_end_icon(Icon::ArrowForward));

        assert_eq!((Icon::ArrowForward, ACTION_CLASS), (icon, class));
        assert_eq!(vec![Msg::BackupOpened], notification.respond(interaction));
    }

    #[test]
    fn trailing_buttons_keep_clicks_off_the_body() {
        let theme = Theme::dark();

        for end_icon in [None, Some(Icon::ArrowForward)].iter() {
            let button: Button<Msg> =
                trailing_button(&theme, *end_icon, Rc::new(Msg::Interacted));

            assert!(button.stops_propagation());
        }
    }

    #[test]
    fn trailing_button_takes_the_theme_fill() {
        for theme in [Theme::dark(), Theme::light()].iter() {
            let node = render_with(open(backup_complete()), theme);
            let close = inspect::find_by_class(&node, CLOSE_CLASS)[0];
            let mut expected = "background-color:".to_string();
            expected.push_str(theme.fill.faint);

            assert_eq!(Some(expected), inspect::attr(close, "style"));
        }
    }

    #[test]
    fn close_button_is_there_by_default() {
        let node = render(open(backup_complete()));

        assert_eq!(1, inspect::find_by_class(&node, CLOSE_CLASS).len());
        assert!(inspect::find_by_class(&node, ACTION_CLASS).is_empty());
    }

    #[test]
    fn there_is_no_end_icon_action_without_an_end_icon() {
        assert_eq!(
            Vec::<Msg>::new(),
            open(backup_complete()).respond(Interaction::EndIcon)
        );
    }

    #[test]
    fn info_icon_is_the_default_start_icon() {
        let node = render(open(backup_complete()));

        assert_eq!(
            vec!["info".to_string(), "close".to_string()],
            data_icons(&node)
        );
    }

    #[test]
    fn start_icon_replaces_the_info_icon() {
        let node = render(open(backup_complete().with_start_icon(Icon::Done)));

        assert_eq!(
            vec!["done".to_string(), "close".to_string()],
            data_icons(&node)
        );
    }

    #[test]
    fn only_present_text_is_rendered() {
        let node = render(open(backup_complete().with_caption("3 files")));

        assert_eq!(
            vec!["Backup complete".to_string(), "3 files".to_string()],
            inspect::texts(&node)
        );
    }

    #[test]
    fn text_renders_in_order_and_ellipsized() {
        let attributes = backup_complete()
            .with_subtext("Uploads")
            .with_title("Vacation")
            .with_caption("3 files");

        let node = render(open(attributes));
        let lines = inspect::find_by_class(&node, "ellipsize");

        assert_eq!(4, lines.len());
        assert_eq!(
            vec![
                "Uploads".to_string(),
                "Backup complete".to_string(),
                "Vacation".to_string(),
                "3 files".to_string()
            ],
            inspect::texts(&node)
        );
        assert!(inspect::has_class(lines[1], "text-bold"));
        assert!(inspect::has_class(lines[3], "text-small"));
    }

    #[test]
    fn empty_text_is_treated_as_absent() {
        let node = render(open(Attributes::new("", Msg::BackupOpened).with_title("")));

        assert!(inspect::texts(&node).is_empty());
        assert!(inspect::find_by_class(&node, "ellipsize").is_empty());
    }

    #[test]
    fn anchored_bottom_right_by_default() {
        let node = render(open(backup_complete()));
        let style = inspect::attr(&node, "style").unwrap_or_default();

        assert!(style.starts_with("bottom:24px; right:24px; width:320px; background-color:#000;"));
    }

    #[test]
    fn anchor_and_overrides_apply() {
        let notification = open(backup_complete())
            .anchor(Horizontal::Left, crate::view::notification::Vertical::Top)
            .with_style("width", "400px");

        let style = inspect::attr(&render(notification), "style").unwrap_or_default();

        assert!(style.starts_with("top:24px; left:24px;"));
        assert!(style.ends_with("width:400px; "));
    }

    #[test]
    fn body_padding_comes_from_theme_spacing() {
        let node = render(open(backup_complete()));
        let body = inspect::children(&node)[0];

        assert_eq!(Some("notification-body".to_string()), inspect::tag(body));
        assert!(inspect::attr(body, "style")
            .unwrap_or_default()
            .starts_with("padding:12px 16px;"));
    }
}
