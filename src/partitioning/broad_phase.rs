use crate::object::CollisionObject;
use alloc::sync::Arc;

/// The handle of an object registered to a broad-phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ObjectHandle(pub u32);

impl ObjectHandle {
    /// The index of this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Callback invoked by a broad-phase for each candidate pair of objects.
///
/// Returning `true` stops the enumeration of candidate pairs.
pub type BroadPhaseCallback<'a> = dyn FnMut(&CollisionObject, &CollisionObject) -> bool + 'a;

/// A spatial index enumerating the pairs of objects with overlapping bounding volumes.
pub trait BroadPhase {
    /// Registers an object, returning the handle needed to unregister it.
    fn register(&mut self, object: Arc<CollisionObject>) -> ObjectHandle;

    /// Unregisters an object.
    ///
    /// Returns `None` if the handle does not identify a registered object.
    fn unregister(&mut self, handle: ObjectHandle) -> Option<Arc<CollisionObject>>;

    /// Unregisters every object.
    fn clear(&mut self);

    /// The number of registered objects.
    fn len(&self) -> usize;

    /// Returns `true` if no object is registered.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Calls `callback` with every pair of registered objects with overlapping bounding volumes,
    /// until it returns `true`.
    fn collide(&self, callback: &mut BroadPhaseCallback<'_>);

    /// Calls `callback` with `object` and every registered object with a bounding volume
    /// overlapping its own, until it returns `true`.
    ///
    /// `object` is always passed as the first argument of the callback, and is never paired with
    /// itself if it is registered to this broad-phase.
    fn collide_object(&self, object: &CollisionObject, callback: &mut BroadPhaseCallback<'_>);
}
