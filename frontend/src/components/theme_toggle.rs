use yew::prelude::*;

use crate::theme::ThemeMode;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub mode: ThemeMode,
    pub on_toggle: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    // Sun while dark, moon while light.
    let icon = if props.mode.is_dark() {
        "fas fa-sun"
    } else {
        "fas fa-moon"
    };

    html! {
        <button
            class="icon-button"
            onclick={props.on_toggle.clone()}
            aria-label="Toggle dark mode"
        >
            <i class={icon}></i>
        </button>
    }
}
