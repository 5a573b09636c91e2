use yew::prelude::*;

use crate::styles;

pub fn input_style(has_error: bool) -> &'static str {
    if has_error {
        styles::INPUT_ERROR
    } else {
        styles::INPUT
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum MessageKind {
    Error,
    Hint,
}

#[derive(Properties, PartialEq)]
pub struct FieldMessageProps {
    #[prop_or_default]
    pub message: Option<String>,
    #[prop_or(MessageKind::Error)]
    pub kind: MessageKind,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Message under a form field. Renders nothing when there is no message.
#[function_component(FieldMessage)]
pub fn field_message(props: &FieldMessageProps) -> Html {
    let Some(message) = props.message.clone() else {
        return html! {};
    };

    let (class, role) = match props.kind {
        MessageKind::Error => (styles::TEXT_ERROR, "alert"),
        MessageKind::Hint => (styles::TEXT_HINT, "status"),
    };

    html! {
        <p id={props.id.clone()} class={classes!("mt-1", class)} role={role}>
            {message}
        </p>
    }
}
