/// Handle for a node owned by a [`crate::compositor::Compositor`].
///
/// Handles are handed out in increasing order and never reused, so a
/// handle to a removed node stays dangling instead of aliasing a newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
