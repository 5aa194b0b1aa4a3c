//! Ordered record collection with its own id counter.

use crate::shared::blog::{Category, Comment, EntityId, Post, User};

/// A row the store can assign an id to.
pub trait Record {
    fn id(&self) -> EntityId;
    fn set_id(&mut self, id: EntityId);
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> EntityId {
                    self.id
                }

                fn set_id(&mut self, id: EntityId) {
                    self.id = id;
                }
            }
        )*
    };
}

impl_record!(User, Post, Category, Comment);

/// Insertion-ordered rows of one entity type.
///
/// Ids come from `next_id`, which starts at 1 and only moves forward: removing
/// a row never frees its id. Lookups are linear scans.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    rows: Vec<T>,
    next_id: EntityId,
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_id: 1,
        }
    }

    /// Assign the next id to `record`, append it and return the id.
    pub fn insert(&mut self, mut record: T) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        record.set_id(id);
        self.rows.push(record);
        id
    }

    /// First row matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&&T) -> bool,
    {
        self.rows.iter().find(predicate)
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.find(|row| row.id() == id)
    }

    /// Run `mutate` on the row with `id`. `None` if there is no such row.
    pub fn update<R, F>(&mut self, id: EntityId, mutate: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        self.rows.iter_mut().find(|row| row.id() == id).map(mutate)
    }

    /// Remove the row with `id`, returning it.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }

    /// Rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
