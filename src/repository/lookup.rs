//! Brand, category and unit lookups offered by the product forms.

use diesel::prelude::*;

use crate::domain::lookup::Lookup;
use crate::models::lookup::Lookup as DbLookup;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, LookupReader};

impl LookupReader for DieselRepository {
    fn list_brands(&self) -> RepositoryResult<Vec<Lookup>> {
        use crate::schema::brands;

        let mut conn = self.conn()?;
        let rows = brands::table
            .order(brands::name.asc())
            .load::<DbLookup>(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_categories(&self) -> RepositoryResult<Vec<Lookup>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let rows = categories::table
            .order(categories::name.asc())
            .load::<DbLookup>(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_units(&self) -> RepositoryResult<Vec<Lookup>> {
        use crate::schema::units;

        let mut conn = self.conn()?;
        let rows = units::table
            .order(units::name.asc())
            .load::<DbLookup>(&mut conn)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
