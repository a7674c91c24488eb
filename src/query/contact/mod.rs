//! Contacts reported by collision queries.

pub use self::contact::Contact;

mod contact;
