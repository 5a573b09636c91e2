pub mod cookie_banner;

pub use cookie_banner::CookieBanner;
