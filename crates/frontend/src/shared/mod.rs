pub mod ai;
pub mod date_utils;
pub mod format;
pub mod navbar;
