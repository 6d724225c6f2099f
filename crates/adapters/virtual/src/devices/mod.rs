//! Virtual device implementations — television, radio.
//!
//! Every device gets a fresh [`DeviceId`](remotehub_domain::id::DeviceId)
//! and announces through the console handed to it at construction.

mod radio;
mod television;

pub use radio::Radio;
pub use television::Television;
