use std::collections::HashMap;

use parking_lot::Mutex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::database::seed;
use crate::models::Activity;

/// In-memory store of every activity the service knows about.
///
/// The set of names is fixed when the catalog is built; only rosters change
/// afterwards. Each activity sits behind its own lock so that the check and
/// the mutation of a single signup or unregister happen atomically without
/// blocking callers working on other activities.
#[derive(Debug)]
pub struct ActivityCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

#[derive(Debug)]
struct CatalogEntry {
    name: String,
    activity: Mutex<Activity>,
}

impl ActivityCatalog {
    /// Builds a catalog in the given order. A repeated name replaces the
    /// earlier activity but keeps its position.
    pub fn new<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>,
    {
        let mut entries: Vec<CatalogEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (name, activity) in activities {
            let name: String = name.into();
            match index.get(&name) {
                Some(&i) => {
                    entries[i] = CatalogEntry {
                        name,
                        activity: Mutex::new(activity),
                    }
                }
                None => {
                    index.insert(name.clone(), entries.len());
                    entries.push(CatalogEntry {
                        name,
                        activity: Mutex::new(activity),
                    });
                }
            }
        }
        Self { entries, index }
    }

    /// Catalog populated with the school's default activities.
    pub fn seeded() -> Self {
        Self::new(seed::default_activities())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.with_activity(name, |activity| activity.clone())
    }

    /// Runs `f` with exclusive access to one activity. Returns `None` when the
    /// name is unknown.
    pub fn with_activity<R>(&self, name: &str, f: impl FnOnce(&mut Activity) -> R) -> Option<R> {
        let entry = &self.entries[*self.index.get(name)?];
        let mut activity = entry.activity.lock();
        Some(f(&mut *activity))
    }

    /// Copies the catalog out. Activities are locked one at a time, so the
    /// snapshot is consistent per activity, not across activities.
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot(
            self.entries
                .iter()
                .map(|e| (e.name.clone(), e.activity.lock().clone()))
                .collect(),
        )
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Point-in-time copy of the catalog. Serializes as a JSON object keyed by
/// activity name, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot(Vec<(String, Activity)>);

impl CatalogSnapshot {
    #[cfg(test)]
    fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for CatalogSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}
