use super::{KeyboardPanel, MousePanel};
use crate::hooks::use_theme;
use crate::AppConfig;
use dioxus::prelude::*;
use inputscope_core::Label;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::default);
    let locale = config.locale;
    let theme = use_theme();

    let dark = theme.is_dark();
    let title = locale.label(Label::Title);
    let toggle_label = locale.label(Label::ToggleTheme);
    let status = if dark {
        locale.label(Label::DarkModeOn)
    } else {
        locale.label(Label::LightModeOn)
    };

    rsx! {
        Stylesheet { href: MAIN_CSS }
        div { class: "page",
            header { class: "page-header",
                div { class: "page-title-row",
                    h1 { class: "page-title", "{title}" }
                    button {
                        class: "theme-toggle",
                        r#type: "button",
                        aria_label: "{toggle_label}",
                        onclick: move |_| theme.toggle(),
                        if dark { "☀" } else { "☾" }
                    }
                }
                p { class: "theme-status", "{status}" }
            }
            div { class: "panels",
                MousePanel {}
                KeyboardPanel {}
            }
        }
    }
}
