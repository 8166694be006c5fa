mod notification;
mod section;
mod thumbnail;

use crate::route;
use crate::route::component_library::Route;
use crate::style::Style;
use crate::theme::Theme;
use crate::view::button::Button;
use crate::view::cell::{Cell, Row};
use seed::prelude::Orders;

///////////////////////////////////////////////////////////////
// Types //
///////////////////////////////////////////////////////////////

pub struct Model {
    active_section: Section,
    notification: notification::Model,
}

#[derive(PartialEq, Clone, Copy, Debug)]
enum Section {
    Thumbnail,
    Notification,
}

#[derive(Clone, Debug)]
pub enum Msg {
    Notification(notification::Msg),
}

///////////////////////////////////////////////////////////////
// Init //
///////////////////////////////////////////////////////////////

pub fn init(route: Route) -> Model {
    Model {
        active_section: Section::from_route(route),
        notification: notification::init(),
    }
}

///////////////////////////////////////////////////////////////
// Helpers //
///////////////////////////////////////////////////////////////

const ALL_SECTIONS: &[Section] = &[Section::Thumbnail, Section::Notification];

impl Section {
    fn from_route(route: Route) -> Section {
        match route {
            Route::Thumbnail => Section::Thumbnail,
            Route::Notification => Section::Notification,
        }
    }

    fn to_route(self) -> route::Route {
        let sub_route = match self {
            Section::Thumbnail => Route::Thumbnail,
            Section::Notification => Route::Notification,
        };

        route::Route::ComponentLibrary(sub_route)
    }

    fn to_label(self) -> &'static str {
        match self {
            Section::Thumbnail => "thumbnail",
            Section::Notification => "notification",
        }
    }
}

///////////////////////////////////////////////////////////////
// Api //
///////////////////////////////////////////////////////////////

impl Model {
    /// Moving between sections keeps whatever state the sections had.
    pub fn set_route(&mut self, route: Route) {
        self.active_section = Section::from_route(route);
    }
}

///////////////////////////////////////////////////////////////
// Update //
///////////////////////////////////////////////////////////////

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Notification(sub_msg) => notification::update(
            sub_msg,
            &mut model.notification,
            &mut orders.proxy(Msg::Notification),
        ),
    }
}

///////////////////////////////////////////////////////////////
// View //
///////////////////////////////////////////////////////////////

pub fn view(theme: &Theme, model: &Model) -> Vec<Row<Msg>> {
    vec![Row::from_cells(
        vec![Style::Grow],
        vec![
            Cell::from_rows(vec![Style::BorderR, Style::P3, Style::G3], nav_bar(model)),
            Cell::from_rows(
                vec![Style::Grow, Style::P3, Style::G3],
                main_area(theme, model),
            ),
        ],
    )]
}

fn nav_bar(model: &Model) -> Vec<Row<Msg>> {
    let mut ret_rows = Vec::new();

    let header_row = Row::from_cells(vec![], vec![Cell::from_str(vec![], "Component Library")]);

    ret_rows.push(header_row);

    for section in ALL_SECTIONS {
        let section_row = Row::from_cells(
            vec![],
            vec![Button::simple(section.to_label())
                .active(*section == model.active_section)
                .route(section.to_route())
                .cell()],
        );

        ret_rows.push(section_row);
    }

    ret_rows
}

fn main_area(theme: &Theme, model: &Model) -> Vec<Row<Msg>> {
    match model.active_section {
        Section::Thumbnail => thumbnail::view(theme),
        Section::Notification => notification::view(theme, &model.notification)
            .into_iter()
            .map(|row| row.map_msg(Msg::Notification))
            .collect(),
    }
}
