//! Request handlers for the public pages.

mod create;
mod landing;
mod redirect;

pub use create::create_handler;
pub use landing::landing_handler;
pub use redirect::redirect_handler;
