//! Application service layer.
//!
//! Services contain the business logic behind each user-facing command and
//! keep the binary's command loop free of store manipulation.

mod contact_service;

pub use contact_service::ContactService;
