pub mod api;
pub mod compare;
pub mod http_handlers;
pub mod request;
