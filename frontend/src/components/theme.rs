use log::info;
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Stored preference wins; otherwise follow the OS setting.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
        match stored {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            _ if prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

fn initial_theme() -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::Light;
    };
    let stored = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
        .flatten();
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    Theme::resolve(stored.as_deref(), prefers_dark)
}

fn apply_theme(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force("dark", theme == Theme::Dark);
    }
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

pub type ThemeContext = UseStateHandle<Theme>;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(initial_theme);

    use_effect_with_deps(
        |theme: &Theme| {
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    html! {
        <ContextProvider<ThemeContext> context={theme}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_context::<ThemeContext>();
    let Some(theme) = theme else {
        return html! {};
    };
    let is_dark = *theme == Theme::Dark;

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = theme.toggled();
            info!("Switching to {} theme", next.as_str());
            theme.set(next);
        })
    };

    html! {
        <button
            class={classes!("theme-toggle", is_dark.then(|| "is-dark"))}
            {onclick}
            aria-label={if is_dark { "Switch to light mode" } else { "Switch to dark mode" }}
        >
            <span class="theme-icon sun">{"☀"}</span>
            <span class="theme-icon moon">{"☾"}</span>
        </button>
    }
}
