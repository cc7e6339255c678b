use crate::entity::Entity;
use crate::physics::{self, InfluenceRadius, Tuning};
use glam::Vec2;

/// The entities of one view plus the coefficients that move them.
#[derive(Clone, Debug)]
pub struct Field<V> {
    entities: Vec<Entity<V>>,
    pub tuning: Tuning,
}

impl<V> Default for Field<V> {
    fn default() -> Self {
        Self::new(Vec::new(), Tuning::default())
    }
}

impl<V> Field<V> {
    pub fn new(entities: Vec<Entity<V>>, tuning: Tuning) -> Self {
        Self { entities, tuning }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity<V>> {
        self.entities.iter()
    }

    pub fn entities(&self) -> &[Entity<V>] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity<V>] {
        &mut self.entities
    }

    /// Swaps in a freshly constructed entity set.
    pub fn replace(&mut self, entities: Vec<Entity<V>>) {
        self.entities = entities;
    }

    /// Steps every entity once against the same pointer snapshot.
    pub fn tick(&mut self, pointer: Option<Vec2>, radius: InfluenceRadius) {
        let tuning = self.tuning;
        for entity in &mut self.entities {
            physics::step(entity, pointer, radius, &tuning);
        }
    }

    pub fn reset(&mut self) {
        for entity in &mut self.entities {
            entity.deactivate();
        }
    }

    pub fn rescale(&mut self, ratio: Vec2) {
        for entity in &mut self.entities {
            entity.rescale(ratio);
        }
    }
}
