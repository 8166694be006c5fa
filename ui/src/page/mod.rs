pub mod component_library;
pub mod not_found;

///////////////////////////////////////////////////////////////
// Types
///////////////////////////////////////////////////////////////

pub enum Page {
    ComponentLibrary(component_library::Model),
    NotFound,
    Blank,
}
