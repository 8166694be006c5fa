use seed::dom_entity_names::Tag;
use seed::prelude::{El, Node};
use std::borrow::Cow;

////////////////////////////////////////////////////////////////
// Types //
////////////////////////////////////////////////////////////////

/// Outlined material icons, drawn on a 24 by 24 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Info,
    Close,
    Photo,
    PlayCircle,
    Done,
    ArrowForward,
}

////////////////////////////////////////////////////////////////
// Helpers //
////////////////////////////////////////////////////////////////

impl Icon {
    fn path(self) -> &'static str {
        match self {
            Icon::Info => "M11 7h2v2h-2zm0 4h2v6h-2zm1-9C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8z",
            Icon::Close => "M19 6.41 17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z",
            Icon::Photo => "M19 5v14H5V5h14m0-2H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm-4.86 8.86-3 3.87L9 13.14 6 17h12l-3.86-5.14z",
            Icon::PlayCircle => "m10 16.5 6-4.5-6-4.5v9zM12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8z",
            Icon::Done => "M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4L9 16.2z",
            Icon::ArrowForward => "m12 4-1.41 1.41L16.17 11H4v2h12.17l-5.58 5.59L12 20l8-8z",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Icon::Info => "info",
            Icon::Close => "close",
            Icon::Photo => "photo",
            Icon::PlayCircle => "play-circle",
            Icon::Done => "done",
            Icon::ArrowForward => "arrow-forward",
        }
    }
}

////////////////////////////////////////////////////////////////
// Api //
////////////////////////////////////////////////////////////////

impl Icon {
    pub fn html<Msg>(self) -> Node<Msg> {
        let mut path: El<Msg> = El::empty_svg(Tag::Custom(Cow::Borrowed("path")));
        path.add_attr(Cow::Borrowed("d"), self.path());

        let mut svg: El<Msg> = El::empty_svg(Tag::Custom(Cow::Borrowed("svg")));
        svg.add_class("icon");
        svg.add_attr(Cow::Borrowed("data-icon"), self.name());
        svg.add_attr(Cow::Borrowed("viewBox"), "0 0 24 24");
        svg.add_attr(Cow::Borrowed("aria-hidden"), "true");
        svg.children.push(Node::Element(path));

        Node::Element(svg)
    }
}
