use crate::theme::{Theme, ThemeName};
use seed::browser::web_storage::{LocalStorage, WebStorage, WebStorageError};
use seed::error;

///////////////////////////////////////////////////////////////
// Types //
///////////////////////////////////////////////////////////////

pub struct Model {
    theme: Theme,
}

#[derive(Clone, Debug)]
pub enum Msg {
    ClickedToggleTheme,
}

///////////////////////////////////////////////////////////////
// Api //
///////////////////////////////////////////////////////////////

pub const THEME_KEY: &str = "gallery-theme";

impl Model {
    pub fn init() -> Model {
        let theme_name = match stored_theme_name(LocalStorage::get(THEME_KEY)) {
            Ok(theme_name) => theme_name,
            Err(err) => {
                error!("could not load theme preference", err);
                ThemeName::default()
            }
        };

        Model {
            theme: theme_name.theme(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

/// Nothing stored yet is not an error, just the default theme.
fn stored_theme_name(
    result: Result<ThemeName, WebStorageError>,
) -> Result<ThemeName, WebStorageError> {
    match result {
        Err(WebStorageError::KeyNotFoundError) => Ok(ThemeName::default()),
        other => other,
    }
}

///////////////////////////////////////////////////////////////
// Update //
///////////////////////////////////////////////////////////////

pub fn update(msg: Msg, model: &mut Model) {
    match msg {
        Msg::ClickedToggleTheme => {
            let theme_name = model.theme.name.toggle();

            model.theme = theme_name.theme();

            if let Err(err) = LocalStorage::insert(THEME_KEY, &theme_name) {
                error!("could not save theme preference", err);
            }
        }
    }
}
