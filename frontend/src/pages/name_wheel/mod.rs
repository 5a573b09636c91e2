mod wheel_svg;
mod wheel_utils;

use gloo_timers::callback::Timeout;
use shared::shared_name_wheel::winner_at_rotation;
use shared::{compute_slices, WheelSpinState};
use yew::prelude::*;

use crate::config::wheel_config;
use crate::hooks::form_state::use_form_state;
use crate::hooks::use_roster::use_roster;
use crate::styles;
use wheel_svg::WheelSvg;
use wheel_utils::{NameEntry, NameList, SpinButton, WinnerDisplay};

#[function_component(NameWheel)]
pub fn name_wheel() -> Html {
    let roster = use_roster();
    let config = use_memo((), |_| wheel_config());
    let spin_state = use_state(WheelSpinState::new);
    let winner = use_state(|| None::<String>);
    let notice = use_form_state(None);
    // Holds the pending reveal so it is not dropped (and cancelled) early
    let pending_reveal = use_mut_ref(|| None::<Timeout>);

    let slices = use_memo(roster.roster().clone(), compute_slices);
    let can_spin = spin_state.can_spin(roster.roster());

    let on_add = {
        let roster = roster.clone();
        let notice = notice.clone();
        Callback::from(move |name: String| match roster.add(&name) {
            Ok(()) => {
                notice.clear.emit(());
                true
            }
            Err(e) => {
                log::debug!("Rejected entrant: {}", e);
                notice.handle_error.emit(e.user_message().to_string());
                false
            }
        })
    };

    let on_remove = {
        let roster = roster.clone();
        Callback::from(move |name: String| roster.remove(&name))
    };

    let on_spin = {
        let roster = roster.clone();
        let config = config.clone();
        let spin_state = spin_state.clone();
        let winner = winner.clone();
        let notice = notice.clone();
        let pending_reveal = pending_reveal.clone();

        Callback::from(move |_: MouseEvent| {
            if spin_state.is_spinning {
                return;
            }

            let result = match config.spin(roster.roster(), &mut rand::thread_rng()) {
                Ok(result) => result,
                Err(e) => {
                    notice.handle_error.emit(e.user_message().to_string());
                    return;
                }
            };

            notice.clear.emit(());
            winner.set(None);

            let mut next = (*spin_state).clone();
            let rotation = next.start_spin(&result);
            log::debug!(
                "Animating to {:.2} deg, pointer over slice {:?}",
                rotation,
                winner_at_rotation(rotation, roster.roster().count())
            );
            spin_state.set(next.clone());

            let spin_state = spin_state.clone();
            let winner = winner.clone();
            *pending_reveal.borrow_mut() = Some(Timeout::new(config.spin_duration_ms, move || {
                winner.set(Some(result.winner_entrant.clone()));
                next.complete_spin(result);
                spin_state.set(next);
            }));
        })
    };

    html! {
        <section id="name-spinner" class={styles::CARD}>
            <h2 class={styles::TEXT_H2}>{"Who Pays? Spin the Wheel"}</h2>
            <p class={classes!(styles::TEXT_BODY, "mt-1", "mb-4")}>
                {"Add everyone at the table, then let the wheel decide."}
            </p>

            <NameEntry {on_add} disabled={spin_state.is_spinning} />

            if !notice.error.is_empty() {
                <div class={classes!(styles::ALERT_ERROR, "mt-3")} role="alert">
                    {notice.error.clone()}
                </div>
            }

            <div class="mt-4">
                <NameList
                    names={roster.roster().list().to_vec()}
                    {on_remove}
                    disabled={spin_state.is_spinning}
                />
            </div>

            <div class="mt-6">
                <WheelSvg
                    slices={slices}
                    rotation={spin_state.rotation}
                    duration_ms={config.spin_duration_ms}
                />
            </div>

            <div class="mt-6">
                <SpinButton
                    is_spinning={spin_state.is_spinning}
                    {can_spin}
                    onclick={on_spin}
                />
            </div>

            <WinnerDisplay winner={(*winner).clone()} />
        </section>
    }
}
