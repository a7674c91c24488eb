use super::{BroadPhase, BroadPhaseCallback, ObjectHandle};
use crate::object::CollisionObject;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ptr;
use parry::bounding_volume::BoundingVolume;
use slab::Slab;

/// A single-axis sweep-and-prune broad-phase.
///
/// Objects are kept sorted by the lower bound of their world-space AABB along `x`. Candidate pairs
/// are found by sweeping this sorted list, and checking the full AABB overlap of every pair of
/// objects whose `x` intervals overlap.
#[derive(Clone, Debug, Default)]
pub struct SweepAndPrune {
    objects: Slab<Arc<CollisionObject>>,
    // Keys into `objects`, sorted by increasing `aabb.mins.x`.
    sorted: Vec<usize>,
}

impl SweepAndPrune {
    /// An empty broad-phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// The object registered with the given handle.
    pub fn get(&self, handle: ObjectHandle) -> Option<&Arc<CollisionObject>> {
        self.objects.get(handle.index())
    }

    /// Iterates through all the registered objects, sorted along the sweep axis.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectHandle, &Arc<CollisionObject>)> {
        self.sorted
            .iter()
            .map(move |key| (ObjectHandle(*key as u32), &self.objects[*key]))
    }
}

impl BroadPhase for SweepAndPrune {
    fn register(&mut self, object: Arc<CollisionObject>) -> ObjectHandle {
        let mins_x = object.aabb().mins.x;
        let key = self.objects.insert(object);
        let objects = &self.objects;
        let at = self
            .sorted
            .partition_point(|k| objects[*k].aabb().mins.x.total_cmp(&mins_x).is_le());
        self.sorted.insert(at, key);
        ObjectHandle(key as u32)
    }

    fn unregister(&mut self, handle: ObjectHandle) -> Option<Arc<CollisionObject>> {
        let removed = self.objects.try_remove(handle.index())?;
        if let Some(at) = self.sorted.iter().position(|k| *k == handle.index()) {
            let _ = self.sorted.remove(at);
        }
        Some(removed)
    }

    fn clear(&mut self) {
        self.objects.clear();
        self.sorted.clear();
    }

    fn len(&self) -> usize {
        self.objects.len()
    }

    fn collide(&self, callback: &mut BroadPhaseCallback<'_>) {
        for (i, key1) in self.sorted.iter().enumerate() {
            let object1 = &self.objects[*key1];
            let aabb1 = object1.aabb();

            for key2 in &self.sorted[i + 1..] {
                let object2 = &self.objects[*key2];
                let aabb2 = object2.aabb();

                if aabb2.mins.x > aabb1.maxs.x {
                    break;
                }

                if aabb1.intersects(aabb2) && callback(object1, object2) {
                    return;
                }
            }
        }
    }

    fn collide_object(&self, object: &CollisionObject, callback: &mut BroadPhaseCallback<'_>) {
        let aabb = object.aabb();

        for key in &self.sorted {
            let other = &self.objects[*key];
            let other_aabb = other.aabb();

            if other_aabb.mins.x > aabb.maxs.x {
                break;
            }

            if !ptr::eq(object, &**other) && aabb.intersects(other_aabb) && callback(object, other)
            {
                return;
            }
        }
    }
}
