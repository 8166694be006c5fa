use seed::Url;

pub mod component_library;

///////////////////////////////////////////////////////////////
// Types
///////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    ComponentLibrary(component_library::Route),
}

////////////////////////////////////////////////////////////////
// API //
////////////////////////////////////////////////////////////////

impl ToString for Route {
    fn to_string(&self) -> String {
        let mut buf = String::new();
        buf.push('/');
        buf.push_str(self.to_pieces().join("/").as_str());
        buf
    }
}

impl Route {
    fn to_pieces(&self) -> Vec<String> {
        match self {
            Route::ComponentLibrary(sub_route) => {
                let mut pieces = vec![component_library::ROOT.to_string()];

                pieces.append(&mut sub_route.to_pieces());

                pieces
            }
        }
    }

    pub fn from_pieces(pieces: &[String]) -> Option<Route> {
        let mut path = pieces.iter();

        match path.next() {
            None => Some(Route::ComponentLibrary(component_library::LANDING)),
            Some(first) => {
                if first == component_library::ROOT {
                    let sub_route = component_library::Route::from_pieces(path)?;
                    return Some(Route::ComponentLibrary(sub_route));
                }

                None
            }
        }
    }

    pub fn from_url(url: Url) -> Option<Route> {
        Route::from_pieces(url.path())
    }
}
