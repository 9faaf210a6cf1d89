//! Generational entity arena.
//!
//! Entities are stored in slots addressed by `EntityId` handles. Removing an
//! entity bumps its slot's generation, so handles held elsewhere (contact
//! events in particular) resolve to `None` instead of a recycled entity.

use crate::scene::entity::Entity;

/// Stable handle to a scene entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    entity: Option<Entity>,
}

/// Scene-graph replacement: all live entities, keyed by generational handles.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entity: Entity) -> EntityId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entity = Some(entity);
            EntityId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                entity: Some(entity),
            });
            EntityId {
                index,
                generation: 0,
            }
        }
    }

    /// Remove an entity. Returns it if the handle was still live.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation || slot.entity.is_none() {
            return None;
        }
        let entity = slot.entity.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        entity
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entity.as_ref()
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.entity.as_mut()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.entity.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.entity.as_ref().map(|e| {
                (
                    EntityId {
                        index: i as u32,
                        generation: slot.generation,
                    },
                    e,
                )
            })
        })
    }

    /// Snapshot of all live handles, for loops that mutate while iterating.
    pub fn ids(&self) -> Vec<EntityId> {
        self.iter().map(|(id, _)| id).collect()
    }
}
