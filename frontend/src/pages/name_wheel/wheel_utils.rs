use gloo_timers::callback::Timeout;
use shared::constants::WINNER_SCROLL_DELAY_MS;
use web_sys::{Element, HtmlInputElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct NameEntryProps {
    /// Returns whether the name was accepted.
    pub on_add: Callback<String, bool>,
    #[prop_or_default]
    pub disabled: bool,
}

/// Text input plus "Add" button. Enter submits too.
#[function_component(NameEntry)]
pub fn name_entry(props: &NameEntryProps) -> Html {
    let input_ref = use_node_ref();

    let submit = {
        let input_ref = input_ref.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: ()| {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            // Rejected input stays in the field so it can be corrected
            if on_add.emit(input.value()) {
                input.set_value("");
            }
            let _ = input.focus();
        })
    };

    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    let onkeypress = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            submit.emit(());
        }
    });

    html! {
        <div class="flex gap-2">
            <input
                ref={input_ref}
                id="name-input"
                type="text"
                class={classes!(styles::INPUT, "mt-0")}
                placeholder="Enter a name"
                aria-label="Name to add"
                disabled={props.disabled}
                {onkeypress}
            />
            <button
                id="add-name-btn"
                type="button"
                class={styles::BUTTON_PRIMARY}
                disabled={props.disabled}
                {onclick}
            >
                {"Add"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NameListProps {
    pub names: Vec<String>,
    pub on_remove: Callback<String>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(NameList)]
pub fn name_list(props: &NameListProps) -> Html {
    html! {
        <div id="names-list" class="flex flex-wrap gap-2">
            { for props.names.iter().map(|name| {
                let onclick = {
                    let on_remove = props.on_remove.clone();
                    let name = name.clone();
                    Callback::from(move |_: MouseEvent| on_remove.emit(name.clone()))
                };
                html! {
                    <div key={name.clone()} class={styles::NAME_TAG}>
                        <span>{name.clone()}</span>
                        <button
                            type="button"
                            class={styles::NAME_DELETE}
                            aria-label={format!("Remove {}", name)}
                            disabled={props.disabled}
                            {onclick}
                        >
                            {"×"}
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub can_spin: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin the Wheel" };
    let is_disabled = props.is_spinning || !props.can_spin;

    let button_class = if is_disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else {
        "bg-gradient-to-r from-amber-500 to-rose-700 hover:from-amber-600 hover:to-rose-800 text-white shadow-lg hover:shadow-xl"
    };

    html! {
        <button
            id="spin-button"
            type="button"
            onclick={props.onclick.clone()}
            disabled={is_disabled}
            class={classes!(
                "w-full",
                "px-8",
                "py-3",
                "rounded-full",
                "font-bold",
                "text-lg",
                "transition-all",
                "duration-300",
                "focus:outline-none",
                "focus:ring-4",
                "focus:ring-amber-300",
                button_class,
                props.is_spinning.then_some("spinning"),
            )}
        >
            {button_text}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct WinnerDisplayProps {
    pub winner: Option<String>,
}

#[function_component(WinnerDisplay)]
pub fn winner_display(props: &WinnerDisplayProps) -> Html {
    let node_ref = use_node_ref();

    {
        let node_ref = node_ref.clone();
        use_effect_with(props.winner.clone(), move |winner| {
            if winner.is_some() {
                let timeout = Timeout::new(WINNER_SCROLL_DELAY_MS, move || {
                    if let Some(element) = node_ref.cast::<Element>() {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Nearest);
                        element.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                });
                timeout.forget();
            }
            || ()
        });
    }

    let Some(winner) = props.winner.clone() else {
        return html! {};
    };

    html! {
        <div ref={node_ref} id="winner-display" class="mt-6 text-center" role="status" aria-live="polite">
            <p class={styles::TEXT_SMALL}>{"The winner is"}</p>
            <p id="winner-name" class="mt-1 text-3xl font-bold text-rose-800 dark:text-amber-300 animate-bounce">
                {winner}
            </p>
        </div>
    }
}
