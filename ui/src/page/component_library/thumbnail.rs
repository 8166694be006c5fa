use crate::page::component_library::section;
use crate::style::Style;
use crate::theme::Theme;
use crate::view::cell::{Cell, Row};
use crate::view::thumbnail;
use shared::file_type;

pub fn view<Msg: Clone + 'static>(theme: &Theme) -> Vec<Row<Msg>> {
    let framed = |label: &str, inner: Cell<Msg>| {
        Cell::from_rows(
            vec![Style::G1],
            vec![
                Row::from_cells(
                    vec![],
                    vec![Cell::group(vec![], vec![inner]).with_tag_name(FRAME_TAG_NAME)],
                ),
                Row::from_cells(vec![], vec![caption(theme, label)]),
            ],
        )
    };

    let placeholders: Vec<Cell<Msg>> = file_type::ALL
        .iter()
        .map(|file_type| framed(file_type.label(), thumbnail::placeholder(theme, *file_type)))
        .collect();

    vec![
        section::view(
            Some("placeholder"),
            Some(
                r#"
                    Shown in place of a thumbnail we do not have. Videos get a play icon, every other kind of file gets a photo icon
                "#,
            ),
        ),
        vec![Row::from_cells(vec![Style::G3], placeholders)],
        section::view(
            Some("loading"),
            Some(
                r#"
                    Shown while a thumbnail is on its way. Same box as the placeholder, without the icon
                "#,
            ),
        ),
        vec![Row::from_cells(
            vec![],
            vec![framed("loading", thumbnail::loading(theme))],
        )],
    ]
    .concat()
}

const FRAME_TAG_NAME: &str = "thumbnail-frame";

fn caption<Msg: 'static>(theme: &Theme, label: &str) -> Cell<Msg> {
    Cell::from_str(vec![Style::TextSmall], label).with_inline_style("color", theme.text.muted)
}

#[cfg(test)]
mod test_thumbnail_section {
    use crate::page::component_library::thumbnail::{caption, view};
    use crate::theme::Theme;
    use crate::view::cell::Cell;
    use crate::view::inspect;
    use pretty_assertions::assert_eq;
    use shared::file_type;

    #[test]
    fn captions_are_muted_in_either_theme() {
        for theme in [Theme::dark(), Theme::light()].iter() {
            let node = caption::<()>(theme, "video").html();
            let mut expected = "color:".to_string();
            expected.push_str(theme.text.muted);
            expected.push_str("; ");

            assert_eq!(Some(expected), inspect::attr(&node, "style"));
            assert_eq!(vec!["video".to_string()], inspect::texts(&node));
        }
    }

    #[test]
    fn shows_every_file_type_and_the_loading_box() {
        let rows = view::<()>(&Theme::dark());
        let node = Cell::from_rows(vec![], rows).html();

        assert_eq!(
            file_type::ALL.len() + 1,
            inspect::find_by_class(&node, "overlay").len()
        );
    }

    #[test]
    fn muted_text_differs_from_base_text() {
        let theme = Theme::light();

        assert!(theme.text.muted != theme.text.base);
    }
}
