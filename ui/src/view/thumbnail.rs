use crate::style::Style;
use crate::theme::Theme;
use crate::view::cell::Cell;
use crate::view::icon::Icon;
use seed::prelude::Node;
use shared::file_type::FileType;

////////////////////////////////////////////////////////////////
// Api //
////////////////////////////////////////////////////////////////

/// Anything that is not a video gets the photo icon, including file
/// types added after this was written.
pub fn icon_for(file_type: FileType) -> Icon {
    if file_type.is_video() {
        Icon::PlayCircle
    } else {
        Icon::Photo
    }
}

/// Stand in for a thumbnail we can't or won't show.
pub fn placeholder<Msg: 'static>(theme: &Theme, file_type: FileType) -> Cell<Msg> {
    frame(theme, vec![icon_for(file_type).html()])
        .with_styles(vec![Style::Batch(PLACEHOLDER_STYLES.to_vec())])
        .with_inline_style("color", theme.stroke.muted)
}

/// Same box as `placeholder` but empty, for while the thumbnail is
/// still loading.
pub fn loading<Msg: 'static>(theme: &Theme) -> Cell<Msg> {
    frame(theme, vec![])
}

////////////////////////////////////////////////////////////////
// Helpers //
////////////////////////////////////////////////////////////////

// Loading and placeholder share this so swapping one for the other
// never moves anything.
fn frame<Msg: 'static>(theme: &Theme, children: Vec<Node<Msg>>) -> Cell<Msg> {
    Cell::from_html(vec![Style::Overlay], children)
        .with_tag_name(TAG_NAME)
        .with_inline_style("background-color", theme.fill.dark)
        .with_inline_style("border-width", "1px")
        .with_inline_style("border-style", "solid")
        .with_inline_style("border-color", theme.stroke.faint)
        .with_inline_style("border-radius", "4px")
}

const TAG_NAME: &str = "thumbnail";

const PLACEHOLDER_STYLES: [Style; 2] = [Style::JustifyCenter, Style::ItemsCenter];
