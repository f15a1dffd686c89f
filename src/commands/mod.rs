pub mod check;
pub mod configure;
pub mod fetch;
pub mod import;
pub mod list;
pub mod now;
pub mod search;
pub mod show;
