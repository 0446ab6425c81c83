pub mod dashboard;
pub mod form;
pub mod home;
pub mod listings;
pub mod not_found;

pub use dashboard::dashboard_page;
pub use form::form_page;
pub use home::home_page;
pub use listings::listings_page;
pub use not_found::data_not_found_page;
