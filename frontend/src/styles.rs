pub const CONTAINER_SM: &str = "max-w-xl mx-auto px-4 sm:px-6 py-8";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-800/60 backdrop-blur-md border-b border-stone-200/50 dark:border-gray-700/50";
pub const NAV_INNER: &str = "w-full h-16 px-4 sm:px-6 lg:px-8";
pub const NAV_CONTENT: &str = "h-full flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-rose-900 dark:text-amber-200 hover:text-amber-700 dark:hover:text-amber-300 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-rose-800 dark:hover:text-amber-300 transition-all duration-200 after:absolute after:left-0 after:bottom-0 after:h-0.5 after:w-full after:origin-right after:scale-x-0 after:bg-rose-800 dark:after:bg-amber-300 after:transition-transform hover:after:origin-left hover:after:scale-x-100";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-rose-800 dark:hover:text-amber-300 rounded-lg transition-colors duration-200";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_SUCCESS: &str = "bg-amber-50 dark:bg-amber-900/30 border border-amber-200 dark:border-amber-800 rounded-lg p-4 text-rose-900 dark:text-amber-100";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-rose-800 to-rose-900 hover:from-rose-900 hover:to-rose-950 disabled:opacity-50 disabled:cursor-not-allowed shadow-lg hover:shadow-xl transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-stone-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-stone-100 dark:hover:bg-gray-800";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-stone-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-amber-600 disabled:opacity-50";
pub const INPUT_ERROR: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-inset focus:ring-red-500";
pub const FORM: &str = "mt-4 space-y-4";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400";
pub const ALERT_SUCCESS: &str = "bg-green-50 dark:bg-green-900/50 border border-green-200 dark:border-green-800 rounded-lg p-4 text-green-700 dark:text-green-200";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const FOOTER: &str = "w-full bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-t border-stone-200/50 dark:border-gray-700/50";

// Hero section
pub const HERO_CONTAINER: &str = "relative flex items-center justify-center";
pub const HERO_CONTENT: &str = "max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 py-16 text-center";
pub const HERO_TITLE: &str = "text-6xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-amber-500 to-rose-800 mb-6";

// Calculator
pub const TIP_BUTTON: &str = "px-3 py-2 rounded-lg font-semibold border border-stone-300 dark:border-gray-600 text-gray-800 dark:text-gray-200 hover:bg-amber-50 dark:hover:bg-gray-700 transition-colors";
pub const TIP_BUTTON_ACTIVE: &str = "px-3 py-2 rounded-lg font-semibold border border-rose-800 bg-rose-800 text-white";

// Name wheel
pub const NAME_TAG: &str = "inline-flex items-center gap-2 rounded-full bg-amber-100 dark:bg-gray-700 px-3 py-1 text-sm font-medium text-rose-900 dark:text-amber-100";
pub const NAME_DELETE: &str = "leading-none text-lg text-rose-700 dark:text-amber-300 hover:text-rose-950 disabled:opacity-40 disabled:cursor-not-allowed";

pub const COOKIE_BANNER: &str = "fixed bottom-0 inset-x-0 z-50 flex flex-col sm:flex-row items-center justify-between gap-4 p-4 bg-white/95 dark:bg-gray-800/95 border-t border-stone-200 dark:border-gray-700 shadow-2xl";
