//! Identity of host collection instances.

/// Stable identity of a host object for as long as it is alive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

/// A host object the side table can key on.
pub trait HostInstance {
    /// The instance's identity. Must not change while the instance lives.
    fn instance_id(&self) -> InstanceId;
}
