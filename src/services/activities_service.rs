use crate::database::{ActivityCatalog, CatalogSnapshot};

pub fn list_activities(catalog: &ActivityCatalog) -> CatalogSnapshot {
    catalog.snapshot()
}
