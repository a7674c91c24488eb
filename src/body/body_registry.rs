use super::BodyId;
use hashbrown::HashMap;
use smallvec::SmallVec;

/// The touch links of an object attached to the robot.
///
/// Touch links are the robot links that are allowed to be in contact with the attached object
/// (typically the gripper fingers holding it) without being reported as a collision.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AttachedBodyInfo {
    /// The robot link this body is attached to.
    pub attach_link: BodyId,
    touch_links: SmallVec<[BodyId; 4]>,
}

impl AttachedBodyInfo {
    /// Describes a body attached to `attach_link`, touchable by the given links.
    ///
    /// Duplicate touch links are ignored.
    pub fn new(attach_link: impl Into<BodyId>, touch_links: impl IntoIterator<Item = BodyId>) -> Self {
        let mut result = Self {
            attach_link: attach_link.into(),
            touch_links: SmallVec::new(),
        };

        for link in touch_links {
            result.add_touch_link(link);
        }

        result
    }

    /// Allows `link` to touch this attached body.
    pub fn add_touch_link(&mut self, link: BodyId) {
        if !self.touch_links.contains(&link) {
            self.touch_links.push(link);
        }
    }

    /// Returns `true` if `link` is allowed to touch this attached body.
    #[inline]
    pub fn is_touch_link(&self, link: &BodyId) -> bool {
        self.touch_links.contains(link)
    }

    /// The links allowed to touch this attached body.
    pub fn touch_links(&self) -> &[BodyId] {
        &self.touch_links
    }
}

/// Id-based lookup of the bodies attached to the robot.
///
/// Collision objects only carry the [`BodyId`] of their owner; everything else about an attached
/// body is looked up here.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BodyRegistry {
    attached: HashMap<BodyId, AttachedBodyInfo>,
}

impl BodyRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the attached body `id`.
    pub fn attach(&mut self, id: impl Into<BodyId>, info: AttachedBodyInfo) -> Option<AttachedBodyInfo> {
        self.attached.insert(id.into(), info)
    }

    /// Unregisters the attached body `id`.
    pub fn detach(&mut self, id: &BodyId) -> Option<AttachedBodyInfo> {
        self.attached.remove(id)
    }

    /// The information about the attached body `id`, if it is registered.
    pub fn attached(&self, id: &BodyId) -> Option<&AttachedBodyInfo> {
        self.attached.get(id)
    }

    /// The number of registered attached bodies.
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    /// Returns `true` if no attached body is registered.
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    /// Returns `true` if the robot link `link` may touch the attached body `attached`.
    ///
    /// This is `false` whenever `attached` is not a registered attached body.
    #[inline]
    pub fn is_touch_link_exception(&self, link: &BodyId, attached: &BodyId) -> bool {
        self.attached
            .get(attached)
            .map(|info| info.is_touch_link(link))
            .unwrap_or(false)
    }
}
