//! # preen-util
//!
//! Shared helpers for the Preen terminal XMPP client.
//!
//! ## Overview
//!
//! This crate collects the small, self-contained routines the client needs
//! in several places but that belong to no single screen or feature:
//!
//! - [`jid`] — JID parsing and bare-address comparison, used wherever
//!   contact identity is normalized (roster dedup, matching stanzas to
//!   open conversations)
//! - [`vcard`] — file-to-base64 encoding for vCard avatar payloads
//! - [`sys`] — host OS probes: executable lookup in `PATH`, OS/distro
//!   identification for bug-report strings, and an EINTR retry wrapper
//! - [`time`] — legacy delayed-delivery timestamp parsing
//! - [`debug`] — a raw file sink for development diagnostics
//!
//! Everything here is synchronous and free of shared state; all functions
//! are safe to call from any thread.

pub mod debug;
pub mod jid;
pub mod sys;
pub mod time;
pub mod vcard;

pub use jid::{bare_equal, is_user_jid, strip, Jid, JidError};
pub use sys::{find_in_path, is_in_path, os_info, retry_on_interrupt};
pub use vcard::{encode_file, EncodedFile, VcardError};
