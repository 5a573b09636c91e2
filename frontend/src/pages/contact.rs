use shared::constants::{CONTACT_SUCCESS_DURATION_MS, CONTACT_SUCCESS_MESSAGE};
use shared::validation::{ContactErrors, ContactSubmission};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::base::Base;
use crate::hooks::form_state::use_form_state;
use crate::hooks::validation::{input_style, FieldMessage};
use crate::styles;

#[function_component(Contact)]
pub fn contact() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();
    let errors = use_state(ContactErrors::default);
    let form_state = use_form_state(Some(CONTACT_SUCCESS_DURATION_MS));

    let handle_submit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let errors = errors.clone();
        let form_state = form_state.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name), Some(email), Some(message)) = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
                message_ref.cast::<HtmlTextAreaElement>(),
            ) else {
                return;
            };

            let submission = ContactSubmission::new(&name.value(), &email.value(), &message.value());
            match submission.validate() {
                Ok(()) => {
                    log::info!("Contact form accepted for {}", submission.email);
                    errors.set(ContactErrors::default());
                    name.set_value("");
                    email.set_value("");
                    message.set_value("");
                    form_state.handle_success.emit(CONTACT_SUCCESS_MESSAGE.to_string());
                }
                Err(field_errors) => {
                    log::debug!("Contact form rejected: {:?}", field_errors);
                    errors.set(field_errors);
                    form_state.clear.emit(());
                }
            }
        })
    };

    html! {
        <Base>
            <div class={styles::CONTAINER_SM}>
                <section class={styles::CARD}>
                    <h1 class={styles::TEXT_H1}>{"Contact Us"}</h1>
                    <p class={classes!(styles::TEXT_BODY, "mt-2")}>
                        {"Questions, feedback, or a tipping dilemma? Drop us a line."}
                    </p>

                    <form id="contact-form" class={styles::FORM} onsubmit={handle_submit} novalidate={true}>
                        <div>
                            <label for="contact-name" class={styles::TEXT_LABEL}>{"Name"}</label>
                            <input
                                ref={name_ref}
                                id="contact-name"
                                type="text"
                                autocomplete="name"
                                class={input_style(errors.name.is_some())}
                            />
                            <FieldMessage id="name-error" message={errors.name.clone()} />
                        </div>
                        <div>
                            <label for="contact-email" class={styles::TEXT_LABEL}>{"Email"}</label>
                            <input
                                ref={email_ref}
                                id="contact-email"
                                type="email"
                                autocomplete="email"
                                class={input_style(errors.email.is_some())}
                            />
                            <FieldMessage id="email-error" message={errors.email.clone()} />
                        </div>
                        <div>
                            <label for="contact-message" class={styles::TEXT_LABEL}>{"Message"}</label>
                            <textarea
                                ref={message_ref}
                                id="contact-message"
                                rows="5"
                                class={input_style(errors.message.is_some())}
                            />
                            <FieldMessage id="message-error" message={errors.message.clone()} />
                        </div>
                        <button type="submit" class={classes!(styles::BUTTON_PRIMARY, "w-full")}>
                            {"Send Message"}
                        </button>
                    </form>

                    if !form_state.success.is_empty() {
                        <div id="form-success" class={classes!(styles::ALERT_SUCCESS, "mt-4")} role="status">
                            {form_state.success.clone()}
                        </div>
                    }
                </section>
            </div>
        </Base>
    }
}
