//! The food field.
//!
//! Ordinary items are replaced in place when eaten so the field keeps a
//! constant size; premium items come from eliminated bodies and are removed
//! when eaten. Stored in `GameWorld`, NOT as ECS entities, because slot
//! positions are part of the contract.

use rand::Rng;

use serpix_core::config::GameConfig;
use serpix_core::constants::*;
use serpix_core::enums::FoodGrade;
use serpix_core::types::Point;

use crate::world_setup::random_color;

/// A consumable item.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceItem {
    pub id: u64,
    pub position: Point,
    pub radius: f64,
    pub color: String,
    pub value: f64,
    pub grade: FoodGrade,
}

impl ResourceItem {
    pub fn is_premium(&self) -> bool {
        self.grade == FoodGrade::Premium
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResourceField {
    items: Vec<ResourceItem>,
    next_id: u64,
}

impl ResourceField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scatter `count` ordinary items over the whole arena.
    pub fn populate<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R, config: &GameConfig) {
        self.items.reserve(count);
        for _ in 0..count {
            let item = self.ordinary(rng, config);
            self.items.push(item);
        }
    }

    /// Build a fresh ordinary item at a uniform random position.
    fn ordinary<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &GameConfig) -> ResourceItem {
        let position = Point::new(
            rng.gen::<f64>() * config.world_size,
            rng.gen::<f64>() * config.world_size,
        );
        let radius = rng.gen_range(FOOD_RADIUS_MIN..FOOD_RADIUS_MAX);
        let color = random_color(rng, &config.palette);
        ResourceItem {
            id: self.allocate_id(),
            position,
            radius,
            color,
            value: FOOD_VALUE,
            grade: FoodGrade::Ordinary,
        }
    }

    /// Drop a premium item at `position`.
    pub fn push_premium(&mut self, position: Point, color: String) {
        let item = ResourceItem {
            id: self.allocate_id(),
            position,
            radius: PREMIUM_FOOD_RADIUS,
            color,
            value: PREMIUM_FOOD_VALUE,
            grade: FoodGrade::Premium,
        };
        self.items.push(item);
    }

    /// Insert a prepared item (scenario setup).
    pub fn push(&mut self, mut item: ResourceItem) {
        item.id = self.allocate_id();
        self.items.push(item);
    }

    /// Consume the item in slot `index`: ordinary items are replaced in the
    /// same slot, premium items are removed. Returns the eaten item.
    pub fn consume<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
        config: &GameConfig,
    ) -> Option<ResourceItem> {
        if index >= self.items.len() {
            return None;
        }
        if self.items[index].is_premium() {
            return Some(self.items.remove(index));
        }
        let fresh = self.ordinary(rng, config);
        Some(std::mem::replace(&mut self.items[index], fresh))
    }

    pub fn items(&self) -> &[ResourceItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ordinary_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_premium()).count()
    }

    pub fn premium_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_premium()).count()
    }

    /// Positions of every item, in slot order.
    pub fn positions(&self) -> Vec<Point> {
        self.items.iter().map(|item| item.position).collect()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
