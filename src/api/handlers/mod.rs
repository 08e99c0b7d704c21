//! HTTP request handlers for the service endpoints.

pub mod banner;
pub mod redirect;
pub mod shorten;

pub use banner::banner_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
