pub mod breadcrumb;
pub mod layout;
pub mod navbar;
