use serde::Serialize;

/// Id/name pair offered as a choice in the product forms (brand, category or
/// unit of measure).
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Lookup {
    pub id: i32,
    pub name: String,
}
