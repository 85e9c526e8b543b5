//! In-memory scene graph
//!
//! Concrete host used by the demo binary and the tests. Items live in a
//! flat arena addressed by index, so handles stay cheap to copy and a stale
//! handle simply misses instead of dangling.
//!
//! Nesting depth is not limited here; the resolver's depth bound is what
//! keeps deeper items unreachable, and the tests rely on being able to
//! build deeper fixtures.

use crate::domain::core::{Alignment, BoundsFit, Vec2};
use crate::host::scene::{SceneLookup, SceneMutate};

/// Handle into the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(usize);

#[derive(Debug, Clone)]
struct Item {
    name: String,
    visible: bool,
    position: Vec2,
    bounds: Option<(Vec2, BoundsFit, Alignment)>,
    /// `Some` marks the item as a group
    children: Option<Vec<usize>>,
}

impl Item {
    fn new(name: &str, children: Option<Vec<usize>>) -> Self {
        Self {
            name: name.to_string(),
            visible: false,
            position: Vec2::new(0.0, 0.0),
            bounds: None,
            children,
        }
    }
}

/// Scene with a flat item arena and an ordered top level
#[derive(Debug, Default)]
pub struct MemoryScene {
    items: Vec<Item>,
    top_level: Vec<usize>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain item at the top level
    pub fn add_item(&mut self, name: &str) -> ItemId {
        let index = self.push(Item::new(name, None));
        self.top_level.push(index);
        ItemId(index)
    }

    /// Adds an empty group at the top level
    pub fn add_group(&mut self, name: &str) -> ItemId {
        let index = self.push(Item::new(name, Some(Vec::new())));
        self.top_level.push(index);
        ItemId(index)
    }

    /// Adds a plain item inside an existing group
    ///
    /// Falls back to the top level when `group` is not a group.
    pub fn add_child(&mut self, group: ItemId, name: &str) -> ItemId {
        let index = self.push(Item::new(name, None));
        self.attach(group, index);
        ItemId(index)
    }

    /// Adds a nested group inside an existing group
    pub fn add_child_group(&mut self, group: ItemId, name: &str) -> ItemId {
        let index = self.push(Item::new(name, Some(Vec::new())));
        self.attach(group, index);
        ItemId(index)
    }

    fn push(&mut self, item: Item) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    fn attach(&mut self, group: ItemId, index: usize) {
        match self.items.get_mut(group.0).and_then(|g| g.children.as_mut()) {
            Some(children) => children.push(index),
            None => self.top_level.push(index),
        }
    }

    fn index_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name == name)
    }

    // Inspection helpers, used by the tests and the demo status dump. They
    // search the whole arena by name, first match wins.

    pub fn is_visible_by_name(&self, name: &str) -> bool {
        self.index_by_name(name)
            .is_some_and(|index| self.items[index].visible)
    }

    pub fn position_of(&self, name: &str) -> Option<Vec2> {
        self.index_by_name(name).map(|index| self.items[index].position)
    }

    pub fn bounds_of(&self, name: &str) -> Option<Vec2> {
        self.index_by_name(name)
            .and_then(|index| self.items[index].bounds)
            .map(|(size, _, _)| size)
    }

    pub fn fit_of(&self, name: &str) -> Option<(BoundsFit, Alignment)> {
        self.index_by_name(name)
            .and_then(|index| self.items[index].bounds)
            .map(|(_, fit, alignment)| (fit, alignment))
    }

    /// Names of every visible item, in arena order
    pub fn visible_names(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|item| item.visible)
            .map(|item| item.name.as_str())
            .collect()
    }
}

impl SceneLookup for MemoryScene {
    type Handle = ItemId;

    fn find_top_level(&self, name: &str) -> Option<ItemId> {
        self.top_level
            .iter()
            .copied()
            .find(|&index| self.items[index].name == name)
            .map(ItemId)
    }

    fn top_level(&self) -> Vec<ItemId> {
        self.top_level.iter().copied().map(ItemId).collect()
    }

    fn is_group(&self, item: &ItemId) -> bool {
        self.items
            .get(item.0)
            .is_some_and(|item| item.children.is_some())
    }

    fn find_child(&self, group: &ItemId, name: &str) -> Option<ItemId> {
        let children = self.items.get(group.0)?.children.as_ref()?;
        children
            .iter()
            .copied()
            .find(|&index| self.items[index].name == name)
            .map(ItemId)
    }
}

impl SceneMutate for MemoryScene {
    fn is_visible(&self, item: &ItemId) -> bool {
        self.items.get(item.0).is_some_and(|item| item.visible)
    }

    fn set_visible(&mut self, item: &ItemId, visible: bool) {
        if let Some(item) = self.items.get_mut(item.0) {
            item.visible = visible;
        }
    }

    fn set_position(&mut self, item: &ItemId, position: Vec2) {
        if let Some(item) = self.items.get_mut(item.0) {
            item.position = position;
        }
    }

    fn set_bounds(&mut self, item: &ItemId, size: Vec2, fit: BoundsFit, alignment: Alignment) {
        if let Some(item) = self.items.get_mut(item.0) {
            item.bounds = Some((size, fit, alignment));
        }
    }
}
