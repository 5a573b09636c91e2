use gloo_events::EventListener;
use shared::consent;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::storage::BrowserStore;

#[derive(Clone)]
pub struct ConsentState {
    pub visible: bool,
    pub accept: Callback<MouseEvent>,
}

/// Cookie banner visibility. Accepting is remembered; Escape only hides the
/// banner for this page view.
#[hook]
pub fn use_consent() -> ConsentState {
    let visible = use_state(|| !consent::has_accepted(&BrowserStore));

    {
        let visible = visible.clone();
        use_effect_with(*visible, move |is_visible| {
            let listener = if *is_visible {
                window().and_then(|w| w.document()).map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let is_escape = event
                            .dyn_ref::<KeyboardEvent>()
                            .map(|e| e.key() == "Escape")
                            .unwrap_or(false);
                        if is_escape {
                            visible.set(false);
                        }
                    })
                })
            } else {
                None
            };

            move || drop(listener)
        });
    }

    let accept = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            let mut store = BrowserStore;
            if let Err(e) = consent::accept(&mut store) {
                log::warn!("Failed to save cookie consent: {}", e);
            }
            visible.set(false);
        })
    };

    ConsentState {
        visible: *visible,
        accept,
    }
}
