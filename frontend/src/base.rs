use shared::constants::THEME_KEY;
use shared::storage::KeyValueStore;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::CookieBanner;
use crate::storage::BrowserStore;
use crate::{styles, Route};

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

fn apply_theme(dark_mode: bool) {
    let theme = if dark_mode { "dark" } else { "light" };
    if let Some(html) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        html.set_class_name(theme);
    }
    let mut store = BrowserStore;
    if let Err(e) = store.set(THEME_KEY, theme) {
        log::warn!("Failed to save theme: {}", e);
    }
}

/// Page chrome: navigation, cookie banner and footer around the page body.
#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    let dark_mode = use_state(|| {
        BrowserStore
            .get(THEME_KEY)
            .map_or(false, |theme| theme == "dark")
    });

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let new_mode = !*dark_mode;
            apply_theme(new_mode);
            dark_mode.set(new_mode);
        })
    };

    let theme_icon = if *dark_mode { "☀️" } else { "🌙" };
    let theme_label = if *dark_mode { "Switch to light mode" } else { "Switch to dark mode" };

    html! {
        <div class={if *dark_mode { "dark min-h-screen bg-gray-900" } else { "min-h-screen bg-stone-50" }}>
            <nav class={styles::NAV}>
                <div class={styles::NAV_INNER}>
                    <div class={styles::NAV_CONTENT}>
                        <Link<Route> to={Route::Home} classes={styles::NAV_BRAND}>{"What Do I Tip"}</Link<Route>>
                        <div class={styles::NAV_ITEMS}>
                            <Link<Route> to={Route::Calculator} classes={styles::NAV_LINK}>{"Calculator"}</Link<Route>>
                            <Link<Route> to={Route::Contact} classes={styles::NAV_LINK}>{"Contact"}</Link<Route>>
                            <button onclick={toggle_theme} class={styles::BUTTON_ICON} aria-label={theme_label}>
                                {theme_icon}
                            </button>
                        </div>
                    </div>
                </div>
            </nav>
            <main class="pt-16">{props.children.clone()}</main>
            <footer class={styles::FOOTER}>
                <div class="h-16 flex items-center justify-center">
                    <span class={styles::TEXT_SMALL}>{"What Do I Tip · Tips, splits, and fair picks"}</span>
                </div>
            </footer>
            <CookieBanner />
        </div>
    }
}
