use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Inline error/success notices shared by the wheel and the contact form.
#[derive(Clone)]
pub struct FormState {
    pub error: String,
    pub success: String,
    pub handle_success: Callback<String>,
    pub handle_error: Callback<String>,
    pub clear: Callback<()>,
}

/// `success_ttl_ms` hides a success notice again after that long.
#[hook]
pub fn use_form_state(success_ttl_ms: Option<u32>) -> FormState {
    let error = use_state(String::new);
    let success = use_state(String::new);
    let hide_timer = use_mut_ref(|| None::<Timeout>);

    let handle_success = {
        let success = success.clone();
        let error = error.clone();
        let hide_timer = hide_timer.clone();
        Callback::from(move |msg: String| {
            success.set(msg);
            error.set(String::new());
            if let Some(ttl) = success_ttl_ms {
                let success = success.clone();
                // Replacing the handle drops (cancels) any earlier hide timer
                *hide_timer.borrow_mut() = Some(Timeout::new(ttl, move || {
                    success.set(String::new());
                }));
            }
        })
    };

    let handle_error = {
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |msg: String| {
            error.set(msg);
            success.set(String::new());
        })
    };

    let clear = {
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |_| {
            error.set(String::new());
            success.set(String::new());
        })
    };

    FormState {
        error: (*error).clone(),
        success: (*success).clone(),
        handle_success,
        handle_error,
        clear,
    }
}
