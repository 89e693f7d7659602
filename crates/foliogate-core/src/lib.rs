//! Domain services for Foliogate.
//!
//! Holds the logic behind the HTTP surface: the chat relay service and
//! its backend seam, the scripted FAQ responder, the contact relay, and
//! the portfolio content store. Network and SMTP implementations live in
//! `foliogate-infra`; this crate only defines the traits they implement.

pub mod chat;
pub mod contact;
pub mod content;
