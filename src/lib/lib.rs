pub mod asset_getter;
pub mod change_locator;
pub mod changes_getter;
pub mod days;
pub mod document;
pub mod error;
pub mod formatter;
pub mod group_name;
pub mod models;
pub mod reporter;
pub mod site_index;
