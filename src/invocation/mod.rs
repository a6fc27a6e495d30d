mod event;
mod handler;
mod response;

pub use event::InvocationEvent;
pub use handler::handle_invocation;
pub use response::{InvocationResponse, NO_LISTINGS_BODY};
