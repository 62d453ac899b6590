//! JID (Jabber ID) parsing and comparison.
//!
//! A JID has the textual shape `node@domain/resource`, where both the node
//! and the resource are optional: `example.com` is a valid server JID and
//! `alice@example.com` a valid bare user JID. The resource identifies one
//! connected client of an account, so identity questions ("is this the same
//! contact?") compare the bare form and ignore it.
//!
//! Two entry styles are provided: parse once into a [`Jid`] and use its
//! methods, or call the free functions ([`strip`], [`node_of`], ...) that
//! accept raw text and re-parse on every call.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error type for JID parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JidError {
    #[error("invalid address (no domain): {0:?}")]
    InvalidAddress(String),
}

/// A parsed JID. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Jid {
    node: String,
    domain: String,
    resource: String,
}

impl Jid {
    /// The localpart (`alice` in `alice@example.com/tui`). Empty for
    /// server/component JIDs.
    pub fn node(&self) -> &str {
        &self.node
    }

    /// The domain (`example.com` in `alice@example.com/tui`). Never empty.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The resource (`tui` in `alice@example.com/tui`). Empty when the
    /// address does not name a specific connected client.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Render the bare form: `node@domain`, or just `domain` when there is
    /// no node. The resource is discarded.
    pub fn bare(&self) -> String {
        if self.node.is_empty() {
            self.domain.clone()
        } else {
            format!("{}@{}", self.node, self.domain)
        }
    }

    /// True for a real user account (non-empty node), false for a server
    /// or component address.
    pub fn is_user(&self) -> bool {
        !self.node.is_empty()
    }

    /// Bare-address equality: node and domain match, resource ignored.
    /// Comparison is case-sensitive.
    pub fn bare_eq(&self, other: &Jid) -> bool {
        self.node == other.node && self.domain == other.domain
    }
}

impl FromStr for Jid {
    type Err = JidError;

    /// Split on the first `/` (everything after is the resource, which may
    /// itself contain `@` or `/`), then on the first `@` before it. Fails
    /// only when no domain segment can be determined; unusual characters in
    /// the node or resource are accepted as-is.
    fn from_str(text: &str) -> Result<Self, JidError> {
        let (bare, resource) = match text.split_once('/') {
            Some((bare, resource)) => (bare, resource),
            None => (text, ""),
        };
        let (node, domain) = match bare.split_once('@') {
            Some((node, domain)) => (node, domain),
            None => ("", bare),
        };
        if domain.is_empty() {
            return Err(JidError::InvalidAddress(text.to_string()));
        }
        Ok(Jid {
            node: node.to_string(),
            domain: domain.to_string(),
            resource: resource.to_string(),
        })
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.node.is_empty() {
            write!(f, "{}@", self.node)?;
        }
        write!(f, "{}", self.domain)?;
        if !self.resource.is_empty() {
            write!(f, "/{}", self.resource)?;
        }
        Ok(())
    }
}

/// `nick@server/resource` -> `nick@server`.
pub fn strip(text: &str) -> Result<String, JidError> {
    Ok(text.parse::<Jid>()?.bare())
}

/// `nick@server/resource` -> `nick`.
pub fn node_of(text: &str) -> Result<String, JidError> {
    Ok(text.parse::<Jid>()?.node)
}

/// `nick@server/resource` -> `server`.
pub fn domain_of(text: &str) -> Result<String, JidError> {
    Ok(text.parse::<Jid>()?.domain)
}

/// `nick@server/resource` -> `resource`.
pub fn resource_of(text: &str) -> Result<String, JidError> {
    Ok(text.parse::<Jid>()?.resource)
}

/// True iff `text` parses as a JID with a non-empty node, i.e. it names a
/// user account rather than a bare server or component.
pub fn is_user_jid(text: &str) -> bool {
    text.parse::<Jid>().map(|j| j.is_user()).unwrap_or(false)
}

/// Compare two addresses in bare form (resource ignored on both sides).
pub fn bare_equal(a: &str, b: &str) -> Result<bool, JidError> {
    let a: Jid = a.parse()?;
    let b: Jid = b.parse()?;
    Ok(a.bare_eq(&b))
}
