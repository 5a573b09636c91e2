pub mod form_state;
pub mod use_consent;
pub mod use_roster;
pub mod validation;
