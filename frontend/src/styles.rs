pub const PAGE: &str = "min-h-screen bg-gray-50 py-10 px-4 flex flex-col items-center";
pub const SECTION: &str = "w-full max-w-2xl";

pub const CARD: &str = "bg-white rounded-xl shadow-md border border-gray-200";
pub const CARD_HEADER: &str = "px-6 py-4 border-b border-gray-100 bg-green-50 rounded-t-xl";
pub const CARD_BODY: &str = "px-6 py-5 space-y-4";
pub const CARD_SKELETON: &str = "bg-white rounded-xl shadow p-6 animate-pulse space-y-4";

pub const BAR_TRACK: &str = "w-full h-2 bg-gray-200 rounded-full";
pub const BAR_FILL: &str = "h-2 bg-green-500 rounded-full transition-all";

pub const BUTTON_VOTE: &str = "w-full py-2 px-4 text-sm rounded-md transition bg-green-600 text-white hover:bg-green-700 disabled:bg-gray-300 disabled:text-gray-500 disabled:cursor-not-allowed";
pub const BUTTON_LINK: &str = "inline-block px-6 py-2 bg-green-600 text-white font-medium rounded-lg hover:bg-green-700 transition";

pub const HEADING_LG: &str = "text-3xl font-bold text-green-700 text-center mb-10";
pub const HEADING_SM: &str = "text-lg font-semibold text-green-800";

pub const TEXT_MUTED: &str = "text-sm text-gray-600";
pub const TEXT_SUCCESS: &str = "text-sm text-green-600 font-medium text-center transition-opacity duration-300 opacity-100";
pub const TEXT_ALERT: &str = "text-center text-red-500 font-medium mb-10";

pub const FLEX_BETWEEN: &str = "flex justify-between";
pub const SPACE_Y_BASE: &str = "space-y-3";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}
