//! Diesel model shared by the `brands`, `categories` and `units` tables.

use diesel::prelude::*;

use crate::domain::lookup::Lookup as DomainLookup;

#[derive(Debug, Clone, Queryable)]
pub struct Lookup {
    pub id: i32,
    pub name: String,
}

impl From<Lookup> for DomainLookup {
    fn from(lookup: Lookup) -> Self {
        Self {
            id: lookup.id,
            name: lookup.name,
        }
    }
}
