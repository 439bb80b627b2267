use gloo_events::EventListener;
use web_sys::{MediaQueryList, window};
use yew::prelude::*;

/// The light/dark flag every view reads. It follows the system preference until
/// toggled and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
}

fn apply_document_class(theme: Theme) {
    if let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = html.class_list();
        match theme {
            Theme::Dark => {
                class_list.add_1("dark").ok();
            }
            Theme::Light => {
                class_list.remove_1("dark").ok();
            }
        }
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| {
        dark_scheme_query()
            .map(|query| Theme::from_dark(query.matches()))
            .unwrap_or(Theme::Light)
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let listener = dark_scheme_query().map(|query| {
                let target = query.clone();
                EventListener::new(&query, "change", move |_| {
                    theme.set(Theme::from_dark(target.matches()));
                })
            });
            move || drop(listener)
        });
    }

    use_effect_with(*theme, |theme| apply_document_class(*theme));

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}
