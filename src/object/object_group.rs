use super::CollisionObject;
use crate::partitioning::{BroadPhase, ObjectHandle};
use alloc::sync::Arc;
use alloc::vec::Vec;

/// The collision objects of one body, e.g., all the shapes of a robot link.
///
/// A group keeps track of the handles its objects received when registered to a broad-phase so it
/// can unregister them later.
#[derive(Clone, Debug, Default)]
pub struct ObjectGroup {
    objects: Vec<Arc<CollisionObject>>,
    handles: Vec<ObjectHandle>,
}

impl ObjectGroup {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object to this group.
    ///
    /// The object is not registered to any broad-phase this group is already registered to.
    pub fn push(&mut self, object: CollisionObject) {
        self.objects.push(Arc::new(object));
    }

    /// The objects of this group.
    pub fn objects(&self) -> &[Arc<CollisionObject>] {
        &self.objects
    }

    /// The number of objects in this group.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if this group contains no object.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns `true` if the objects of this group are currently registered to a broad-phase.
    pub fn is_registered(&self) -> bool {
        !self.handles.is_empty()
    }

    /// Registers every object of this group to `broad_phase`.
    ///
    /// Does nothing if this group is already registered.
    pub fn register_to(&mut self, broad_phase: &mut dyn BroadPhase) {
        if self.is_registered() {
            return;
        }

        for object in &self.objects {
            self.handles.push(broad_phase.register(object.clone()));
        }
    }

    /// Unregisters every object of this group from `broad_phase`.
    pub fn unregister_from(&mut self, broad_phase: &mut dyn BroadPhase) {
        for handle in self.handles.drain(..) {
            let _ = broad_phase.unregister(handle);
        }
    }

    /// Removes every object from this group.
    ///
    /// The group should be unregistered from any broad-phase first.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.handles.clear();
    }
}
