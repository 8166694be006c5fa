#![allow(clippy::wildcard_imports)]

use seed::{prelude::*, *};

use page::Page;
use route::Route;
use style::Style;

use crate::page::{component_library, not_found};
use crate::view::button::Button;
use crate::view::cell::{Cell, Row};

mod global;
mod page;
mod route;
mod style;
mod theme;
mod view;

///////////////////////////////////////////////////////////////
// Types //
///////////////////////////////////////////////////////////////

struct Model {
    page: Page,
    global: global::Model,
}

#[derive(Clone)]
enum Msg {
    ComponentLibrary(component_library::Msg),
    //
    UrlChanged(subs::UrlChanged),
    Global(global::Msg),
}

///////////////////////////////////////////////////////////////
// Init //
///////////////////////////////////////////////////////////////

fn init(url: Url, orders: &mut impl Orders<Msg>) -> Model {
    orders
        .subscribe(Msg::UrlChanged)
        .notify(subs::UrlChanged(url));

    Model {
        page: Page::Blank,
        global: global::Model::init(),
    }
}

///////////////////////////////////////////////////////////////
// Routing //
///////////////////////////////////////////////////////////////

fn handle_url_change(url: Url, model: &mut Model) {
    match Route::from_url(url) {
        None => {
            model.page = Page::NotFound;
        }

        Some(route) => handle_route_change(route, model),
    };
}

fn handle_route_change(route: Route, model: &mut Model) {
    match route {
        Route::ComponentLibrary(sub_route) => {
            if let Page::ComponentLibrary(sub_model) = &mut model.page {
                sub_model.set_route(sub_route);
            } else {
                model.page = Page::ComponentLibrary(component_library::init(sub_route));
            }
        }
    }
}

///////////////////////////////////////////////////////////////
// Update //
///////////////////////////////////////////////////////////////

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::UrlChanged(subs::UrlChanged(url)) => {
            handle_url_change(url, model);
        }
        Msg::ComponentLibrary(sub_msg) => {
            if let Page::ComponentLibrary(sub_model) = &mut model.page {
                component_library::update(
                    sub_msg,
                    sub_model,
                    &mut orders.proxy(Msg::ComponentLibrary),
                );
            }
        }
        Msg::Global(sub_msg) => {
            global::update(sub_msg, &mut model.global);
        }
    }
}

///////////////////////////////////////////////////////////////
// View //
///////////////////////////////////////////////////////////////

fn view(model: &Model) -> Node<Msg> {
    let theme = model.global.theme();

    let body: Vec<Row<Msg>> = match &model.page {
        Page::ComponentLibrary(sub_model) => component_library::view(theme, sub_model)
            .into_iter()
            .map(|row| row.map_msg(Msg::ComponentLibrary))
            .collect(),
        Page::NotFound => not_found::view(),
        Page::Blank => vec![],
    };

    let mut page_styles: Vec<Style> = match &model.page {
        Page::NotFound => not_found::PARENT_STYLES.to_vec(),
        Page::ComponentLibrary(_) => vec![],
        Page::Blank => vec![],
    };

    page_styles.push(Style::Grow);

    let theme_toggle = Row::from_cells(
        vec![Style::P3],
        vec![Button::simple("toggle theme")
            .on_click(|_| Msg::Global(global::Msg::ClickedToggleTheme))
            .cell()],
    );

    let rows = vec![
        theme_toggle,
        Row::from_cells(vec![Style::Grow], vec![Cell::from_rows(page_styles, body)]),
    ];

    div![
        C!["page-container"],
        style![
            St::BackgroundColor => theme.background(),
            St::Color => theme.text.base,
        ],
        style::global_html(),
        Cell::from_rows(vec![Style::Grow], rows).html(),
    ]
}

///////////////////////////////////////////////////////////////
// App //
///////////////////////////////////////////////////////////////

#[wasm_bindgen(start)]
pub fn start() {
    App::start("app", init, update, view);
}
