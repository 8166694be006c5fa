use std::slice::Iter;

///////////////////////////////////////////////////////////////
// Types //
///////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    Thumbnail,
    Notification,
}

///////////////////////////////////////////////////////////////
// Helpers //
///////////////////////////////////////////////////////////////

const THUMBNAIL_PATH: &str = "thumbnail";

const NOTIFICATION_PATH: &str = "notification";

///////////////////////////////////////////////////////////////
// Api //
///////////////////////////////////////////////////////////////

pub const ROOT: &str = "component-library";

pub const LANDING: Route = Route::Thumbnail;

impl ToString for Route {
    fn to_string(&self) -> String {
        self.to_pieces().join("/")
    }
}

impl Route {
    pub fn to_pieces(self) -> Vec<String> {
        match self {
            Route::Thumbnail => vec![THUMBNAIL_PATH.to_string()],
            Route::Notification => vec![NOTIFICATION_PATH.to_string()],
        }
    }
    pub fn from_pieces(mut pieces: Iter<String>) -> Option<Route> {
        match pieces.next() {
            None => Some(LANDING),
            Some(piece) => {
                if piece == THUMBNAIL_PATH {
                    return Some(Route::Thumbnail);
                }

                if piece == NOTIFICATION_PATH {
                    return Some(Route::Notification);
                }

                None
            }
        }
    }
}
