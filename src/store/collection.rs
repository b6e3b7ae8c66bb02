//! Collection identifiers.

use std::fmt;

/// The two record sets the service manages.
///
/// Each maps to its own table; the sets are structurally identical but
/// fully independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Venues,
    Posts,
}

impl Collection {
    /// Backing table name.
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Venues => "venues",
            Collection::Posts => "posts",
        }
    }

    /// Parse an `/api/{collection}` route segment.
    pub fn from_route(segment: &str) -> Option<Self> {
        match segment {
            "venues" => Some(Collection::Venues),
            "posts" => Some(Collection::Posts),
            _ => None,
        }
    }

    /// Parse the `type` tag of a delete request. The tags are singular
    /// (`venue`, `post`), unlike the route segments.
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        match tag {
            "venue" => Some(Collection::Venues),
            "post" => Some(Collection::Posts),
            _ => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table())
    }
}
