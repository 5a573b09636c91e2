use yew::prelude::*;
use yew_router::prelude::*;

use crate::base::Base;
use crate::styles;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Base>
            <div class={styles::HERO_CONTAINER}>
                <div class={styles::HERO_CONTENT}>
                    <h1 class={styles::HERO_TITLE}>{"What Do I Tip?"}</h1>
                    <p class={classes!(styles::TEXT_BODY, "text-lg", "mb-8")}>
                        {"Split the bill, pick the tip, and let the wheel choose who pays."}
                    </p>
                    <div class="flex justify-center gap-4">
                        <Link<Route> to={Route::Calculator} classes={styles::BUTTON_PRIMARY}>
                            {"Open the Calculator"}
                        </Link<Route>>
                        <Link<Route> to={Route::Contact} classes={styles::BUTTON_SECONDARY}>
                            {"Get in Touch"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </Base>
    }
}
