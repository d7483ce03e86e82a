//! Node identity

/// Dense node id in `[0, n_nodes)`
///
/// Display text and term metadata live in caller-owned tables indexed by the same id.
pub type NodeId = usize;

/// Non-negative edge weight
pub type Cost = u64;

/// Id of the taxonomy root after normalization
pub const ROOT: NodeId = 0;

/// Cost of the edges that attach former roots to a synthesized virtual root
pub const ROOT_EDGE_COST: Cost = 1;
