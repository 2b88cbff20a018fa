use web_sys::MouseEvent;
use yew::prelude::*;

use crate::theme::{Theme, ThemeMode};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub struct UseThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<MouseEvent>,
}

/// Dark-mode flag seeded from the system preference; flipped only by `toggle`.
#[hook]
pub fn use_theme() -> UseThemeHandle {
    let mode = use_state(|| ThemeMode::from_dark_flag(prefers_dark_mode()));

    let toggle = {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set(mode.toggled());
        })
    };

    UseThemeHandle {
        theme: Theme::for_mode(*mode),
        toggle,
    }
}

fn prefers_dark_mode() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
