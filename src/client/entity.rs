use std::{cmp::Ordering, collections::HashMap};

pub trait Entity {
    fn id(&self) -> &str;
}

/// Records indexed by id, plus the order they should be shown in.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityTable<T> {
    ids: Vec<String>,
    entities: HashMap<String, T>,
}

impl<T> Default for EntityTable<T> {
    fn default() -> Self {
        EntityTable {
            ids: Vec::new(),
            entities: HashMap::new(),
        }
    }
}

impl<T: Entity> EntityTable<T> {
    /// Replaces everything with `records`. A repeated id keeps its first
    /// position and its last value. Ordering is a stable sort by `compare`.
    pub fn set_all<F>(records: impl IntoIterator<Item = T>, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut table = EntityTable::default();
        for record in records {
            let id = record.id().to_owned();
            if table.entities.insert(id.clone(), record).is_none() {
                table.ids.push(id);
            }
        }

        let entities = &table.entities;
        table
            .ids
            .sort_by(|a, b| match (entities.get(a), entities.get(b)) {
                (Some(a), Some(b)) => compare(a, b),
                _ => Ordering::Equal,
            });
        table
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entities.get(id)
    }

    pub fn all(&self) -> Vec<&T> {
        self.ids.iter().filter_map(|id| self.entities.get(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
