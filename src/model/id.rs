/// Index of a host within its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostIdx(pub usize);
