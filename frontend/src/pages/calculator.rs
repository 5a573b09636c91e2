use shared::constants::{PEOPLE_DEFAULTED_HINT, TIP_PRESETS};
use shared::tip_calculator::{
    calculate, format_currency, parse_bill, parse_custom_tip, parse_people, TipBreakdown,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::base::Base;
use crate::hooks::validation::{input_style, FieldMessage, MessageKind};
use crate::pages::name_wheel::NameWheel;
use crate::styles;

/// Which tip source is active: a preset button or the custom field.
#[derive(Clone, Copy, PartialEq)]
enum TipChoice {
    None,
    Preset(f64),
    Custom(f64),
}

impl TipChoice {
    fn percent(self) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Preset(p) | Self::Custom(p) => Some(p),
        }
    }
}

#[derive(Clone, PartialEq)]
enum Outcome {
    Pending,
    Invalid(String),
    Ready(TipBreakdown),
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

#[function_component(Calculator)]
pub fn calculator() -> Html {
    let bill = use_state(String::new);
    let people = use_state(|| "1".to_string());
    let custom_tip = use_state(String::new);
    let choice = use_state(|| TipChoice::None);
    let touched = use_state(|| false);

    let outcome = if !*touched {
        Outcome::Pending
    } else {
        match calculate(parse_bill(&bill), parse_people(&people), choice.percent()) {
            Ok(breakdown) => Outcome::Ready(breakdown),
            Err(e) => Outcome::Invalid(e.to_string()),
        }
    };

    let on_bill = {
        let bill = bill.clone();
        let touched = touched.clone();
        Callback::from(move |e: InputEvent| {
            bill.set(input_value(&e));
            touched.set(true);
        })
    };

    let on_people = {
        let people = people.clone();
        Callback::from(move |e: InputEvent| people.set(input_value(&e)))
    };

    let on_custom_tip = {
        let custom_tip = custom_tip.clone();
        let choice = choice.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            // Clearing the field keeps whatever was chosen before
            if !value.is_empty() {
                choice.set(parse_custom_tip(&value).map_or(TipChoice::None, TipChoice::Custom));
            }
            custom_tip.set(value);
        })
    };

    let on_submit = {
        let touched = touched.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            touched.set(true);
        })
    };

    let (bill_error, people_hint, results) = match &outcome {
        Outcome::Pending => (None, None, None),
        Outcome::Invalid(message) => (Some(message.clone()), None, None),
        Outcome::Ready(b) => (
            None,
            b.people_defaulted.then(|| PEOPLE_DEFAULTED_HINT.to_string()),
            Some(*b),
        ),
    };
    // A defaulted party size is shown as 1 in the field, as the user will see it used
    let people_display = match &outcome {
        Outcome::Ready(b) if b.people_defaulted => "1".to_string(),
        _ => (*people).clone(),
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_LG}>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <section class={styles::CARD}>
                        <h1 class={styles::TEXT_H1}>{"Tip Calculator"}</h1>
                        <form id="calculator-form" class={styles::FORM} onsubmit={on_submit} novalidate={true}>
                            <div>
                                <label for="bill-amount" class={styles::TEXT_LABEL}>{"Bill amount"}</label>
                                <input
                                    id="bill-amount"
                                    type="number"
                                    min="0"
                                    step="0.01"
                                    inputmode="decimal"
                                    placeholder="0.00"
                                    class={input_style(bill_error.is_some())}
                                    value={(*bill).clone()}
                                    oninput={on_bill}
                                />
                                <FieldMessage id="bill-error" message={bill_error} />
                            </div>

                            <div>
                                <span class={styles::TEXT_LABEL}>{"Tip"}</span>
                                <div class="mt-2 grid grid-cols-4 gap-2">
                                    { for TIP_PRESETS.iter().map(|&preset| {
                                        let is_active = *choice == TipChoice::Preset(preset);
                                        let onclick = {
                                            let choice = choice.clone();
                                            let custom_tip = custom_tip.clone();
                                            let touched = touched.clone();
                                            Callback::from(move |e: MouseEvent| {
                                                e.prevent_default();
                                                choice.set(TipChoice::Preset(preset));
                                                custom_tip.set(String::new());
                                                touched.set(true);
                                            })
                                        };
                                        html! {
                                            <button
                                                type="button"
                                                class={classes!(
                                                    "tip-btn",
                                                    if is_active { styles::TIP_BUTTON_ACTIVE } else { styles::TIP_BUTTON }
                                                )}
                                                aria-pressed={is_active.to_string()}
                                                {onclick}
                                            >
                                                {format!("{}%", preset)}
                                            </button>
                                        }
                                    }) }
                                </div>
                                <input
                                    id="custom-tip"
                                    type="number"
                                    min="0"
                                    step="0.1"
                                    placeholder="Custom %"
                                    class={styles::INPUT}
                                    value={(*custom_tip).clone()}
                                    oninput={on_custom_tip}
                                />
                            </div>

                            <div>
                                <label for="num-people" class={styles::TEXT_LABEL}>{"Number of people"}</label>
                                <input
                                    id="num-people"
                                    type="number"
                                    min="1"
                                    step="1"
                                    class={styles::INPUT}
                                    value={people_display}
                                    oninput={on_people}
                                />
                                <FieldMessage id="people-helper" message={people_hint} kind={MessageKind::Hint} />
                            </div>

                            <button type="submit" class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                                {"Calculate"}
                            </button>
                        </form>

                        if let Some(breakdown) = results {
                            <ResultsCard {breakdown} />
                        }
                    </section>

                    <NameWheel />
                </div>
            </div>
        </Base>
    }
}

#[derive(Properties, PartialEq)]
struct ResultsCardProps {
    breakdown: TipBreakdown,
}

#[function_component(ResultsCard)]
fn results_card(props: &ResultsCardProps) -> Html {
    let b = &props.breakdown;
    let rows = [
        ("tip-amount", "Tip amount", b.tip_amount),
        ("total-with-tip", "Total with tip", b.total_with_tip),
        ("per-person-tip", "Tip per person", b.per_person_tip),
        ("per-person-total", "Total per person", b.per_person_total),
    ];

    html! {
        <div id="results-card" class={classes!(styles::CARD_SUCCESS, "mt-6")}>
            <dl class="grid grid-cols-2 gap-4">
                { for rows.iter().map(|&(id, label, value)| html! {
                    <div>
                        <dt class={styles::TEXT_SMALL}>{label}</dt>
                        <dd {id} class="text-2xl font-bold">{format_currency(value)}</dd>
                    </div>
                }) }
            </dl>
        </div>
    }
}
