// Theme management
// Light/Dark pair persisted through local_storage

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(Theme::Light));

/// Restores the persisted theme choice; call once at app start.
pub fn init_theme() {
    let stored_theme = local_storage()
        .get("novytree-theme")
        .unwrap_or(Ok(String::new()))
        .unwrap_or_default();

    let theme = match stored_theme.as_str() {
        "dark" => Theme::Dark,
        _ => Theme::Light,
    };
    THEME.set(theme);
}

/// Current theme as a signal for reactive styling.
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

/// Current theme value (non-reactive).
pub fn current_theme() -> Theme {
    THEME.get()
}

/// Sets and persists the theme.
pub fn set_theme(new_theme: Theme) {
    THEME.set(new_theme);
    let theme_str = match new_theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    let _ = local_storage().insert("novytree-theme", theme_str);
}

pub fn toggle_theme() {
    let new_theme = match current_theme() {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    set_theme(new_theme);
}
