pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{calculator::Calculator, contact::Contact, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/calculator")] Calculator,
    #[at("/contact")] Contact,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Calculator => html! { <Calculator /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
