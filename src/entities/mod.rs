pub mod budget_line_item;
pub mod document;
pub mod grant;
pub mod grant_year;
pub mod task;
pub mod user;
