pub const NAMES_STORAGE_KEY: &str = "whatDoITip_names";
pub const COOKIE_CONSENT_KEY: &str = "whatDoITip_cookieConsent";
pub const COOKIE_CONSENT_ACCEPTED: &str = "accepted";

pub const EMPTY_NAME_ERROR: &str = "Please enter a name";
pub const DUPLICATE_NAME_ERROR: &str = "This name is already in the list!";
pub const NOT_ENOUGH_NAMES_ERROR: &str = "Please add at least 2 names!";
pub const UNKNOWN_ENTRANT_ERROR: &str = "That name is no longer on the wheel.";

pub const INVALID_BILL_ERROR: &str = "Please enter a valid bill amount";
pub const PEOPLE_DEFAULTED_HINT: &str = "Defaulting to 1 person";

pub const NAME_REQUIRED_ERROR: &str = "Please enter your name";
pub const EMAIL_REQUIRED_ERROR: &str = "Please enter your email address";
pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const MESSAGE_REQUIRED_ERROR: &str = "Please enter a message";
pub const CONTACT_SUCCESS_MESSAGE: &str = "Thanks for reaching out! We'll get back to you soon.";

pub const TIP_PRESETS: [f64; 4] = [15.0, 18.0, 20.0, 25.0];

pub const MIN_SPIN_ENTRANTS: usize = 2;
pub const SPIN_DURATION_MS: u32 = 3000;
pub const REDUCED_MOTION_SPIN_DURATION_MS: u32 = 600;
pub const FULL_ROTATIONS: u32 = 10;
pub const JITTER_FRACTION: f64 = 0.8;
pub const CONTACT_SUCCESS_DURATION_MS: u32 = 5000;
pub const WINNER_SCROLL_DELAY_MS: u32 = 100;
pub const THEME_KEY: &str = "whatDoITip_theme";
