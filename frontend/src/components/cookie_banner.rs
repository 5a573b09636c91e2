use yew::prelude::*;

use crate::hooks::use_consent::use_consent;
use crate::styles;

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let consent = use_consent();

    if !consent.visible {
        return html! {};
    }

    html! {
        <div id="cookie-banner" class={styles::COOKIE_BANNER} role="dialog" aria-live="polite" aria-label="Cookie notice">
            <p class={styles::TEXT_BODY}>
                {"We use local storage to remember your names and preferences on this device. Nothing is sent to a server."}
            </p>
            <button id="cookie-accept-btn" type="button" class={styles::BUTTON_PRIMARY} onclick={consent.accept}>
                {"Accept"}
            </button>
        </div>
    }
}
