//! Incremental computation of the shortest unambiguous id prefix.
//!
//! A [`Shortener`] accumulates object ids and reports, after every insertion,
//! the smallest number of leading hex digits that still tells all of them
//! apart (never less than a configured floor). This is the length used by
//! `git log --abbrev` style output.
//!
//! Ids are kept in a trie keyed by hex digit. A subtree holding a single id
//! is collapsed into a leaf that stores the id itself; the leaf is pushed one
//! level deeper each time another id shares its path. The depth at which a
//! new id leaves the existing paths is exactly the number of digits needed
//! to distinguish it from its closest neighbour, so each insertion costs at
//! most 40 steps regardless of how many ids are stored.

use tracing::{debug, trace};

use crate::{ObjectId, OidError, DEFAULT_SHORTENER_CAPACITY, HEX_SIZE, MIN_PREFIX_LEN};

/// Index of a node in the arena. The root is node 0 and is never a child,
/// so 0 doubles as the empty-slot marker in `children`.
type NodeIndex = u32;

const ROOT: NodeIndex = 0;
const FANOUT: usize = 16;

/// Smallest floor a shortener accepts.
const MIN_FLOOR: usize = 1;

#[derive(Default)]
struct Node {
    children: [NodeIndex; FANOUT],
    /// Set when exactly one id lives below this node.
    leaf: Option<ObjectId>,
}

impl Node {
    fn leaf(oid: ObjectId) -> Self {
        Self {
            children: [0; FANOUT],
            leaf: Some(oid),
        }
    }
}

/// Construction parameters for a [`Shortener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortenerOptions {
    /// Smallest length ever reported, in hex digits.
    pub min_length: usize,
    /// Maximum number of distinct ids accepted.
    pub capacity: usize,
}

impl Default for ShortenerOptions {
    fn default() -> Self {
        Self {
            min_length: MIN_PREFIX_LEN,
            capacity: DEFAULT_SHORTENER_CAPACITY,
        }
    }
}

/// Tracks a growing set of ids and the shortest prefix length unique to each.
///
/// Insertion needs `&mut self`; independent instances share nothing.
pub struct Shortener {
    nodes: Vec<Node>,
    floor: usize,
    min_length: usize,
    len: usize,
    capacity: usize,
}

impl Shortener {
    /// Create a shortener that never reports fewer than `min_length` digits.
    ///
    /// `min_length` must be between 1 and [`HEX_SIZE`]. The capacity is
    /// [`DEFAULT_SHORTENER_CAPACITY`].
    pub fn new(min_length: usize) -> Result<Self, OidError> {
        Self::with_options(ShortenerOptions {
            min_length,
            ..ShortenerOptions::default()
        })
    }

    /// Create a shortener with an explicit floor and capacity.
    ///
    /// A floor of 0 or above [`HEX_SIZE`] is rejected with
    /// [`OidError::InvalidMinLength`]. A capacity of 0 is allowed and makes
    /// every insertion fail.
    pub fn with_options(options: ShortenerOptions) -> Result<Self, OidError> {
        if !(MIN_FLOOR..=HEX_SIZE).contains(&options.min_length) {
            return Err(OidError::InvalidMinLength {
                min_length: options.min_length,
                min: MIN_FLOOR,
                max: HEX_SIZE,
            });
        }
        Ok(Self {
            nodes: vec![Node::default()],
            floor: options.min_length,
            min_length: options.min_length,
            len: 0,
            capacity: options.capacity,
        })
    }

    /// Add an id given as hex text and return the updated minimal length.
    ///
    /// Only the first 40 characters of `text_oid` are read. Adding an id that
    /// is already present returns the current length without using capacity.
    pub fn add(&mut self, text_oid: &str) -> Result<usize, OidError> {
        let oid = ObjectId::from_hex_bytes(text_oid.as_bytes())?;
        self.add_oid(&oid)
    }

    /// Add an already decoded id and return the updated minimal length.
    pub fn add_oid(&mut self, oid: &ObjectId) -> Result<usize, OidError> {
        let mut idx = ROOT;

        for depth in 0..HEX_SIZE {
            let node = &self.nodes[idx as usize];

            if let Some(existing) = node.leaf {
                if existing == *oid {
                    return Ok(self.min_length);
                }
                self.check_capacity()?;
                let diverge = existing.common_prefix_len(oid);
                self.split_leaf(idx, depth, existing, *oid, diverge)?;
                self.len += 1;
                return Ok(self.record(diverge + 1));
            }

            let digit = oid.nibble(depth) as usize;
            let child = node.children[digit];
            if child == 0 {
                self.check_capacity()?;
                let leaf = self.push(Node::leaf(*oid))?;
                self.nodes[idx as usize].children[digit] = leaf;
                self.len += 1;
                return Ok(self.record(depth + 1));
            }
            idx = child;
        }

        // All 40 digits matched a stored id.
        Ok(self.min_length)
    }

    /// Whether `oid` has been added.
    pub fn contains(&self, oid: &ObjectId) -> bool {
        let mut idx = ROOT;
        for depth in 0..HEX_SIZE {
            let node = &self.nodes[idx as usize];
            if let Some(existing) = node.leaf {
                return existing == *oid;
            }
            match node.children[oid.nibble(depth) as usize] {
                0 => return false,
                child => idx = child,
            }
        }
        self.nodes[idx as usize].leaf.as_ref() == Some(oid)
    }

    /// The current minimal unique prefix length, in hex digits.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// The configured floor.
    pub fn floor(&self) -> usize {
        self.floor
    }

    /// Maximum number of distinct ids this shortener accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of distinct ids added.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no id has been added yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first [`min_length`](Self::min_length) hex digits of `oid`.
    pub fn abbreviate(&self, oid: &ObjectId) -> String {
        let mut hex = oid.to_hex();
        hex.truncate(self.min_length);
        hex
    }

    fn check_capacity(&self) -> Result<(), OidError> {
        if self.len >= self.capacity {
            debug!(capacity = self.capacity, "shortener rejected id: capacity reached");
            return Err(OidError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Replace the leaf at `idx` (reached after `depth` digits) with a chain of
    /// inner nodes covering the digits both ids share, ending in two leaves.
    fn split_leaf(
        &mut self,
        idx: NodeIndex,
        depth: usize,
        existing: ObjectId,
        added: ObjectId,
        diverge: usize,
    ) -> Result<(), OidError> {
        // Reserve up front so a failure cannot leave a half-built chain.
        let needed = diverge - depth + 2;
        self.nodes
            .try_reserve(needed)
            .map_err(|_| OidError::AllocationFailed)?;
        if self.nodes.len() + needed > NodeIndex::MAX as usize {
            return Err(OidError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.nodes[idx as usize].leaf = None;
        let mut parent = idx;
        for shared in depth..diverge {
            let child = self.push(Node::default())?;
            self.nodes[parent as usize].children[existing.nibble(shared) as usize] = child;
            parent = child;
        }

        let old_leaf = self.push(Node::leaf(existing))?;
        let new_leaf = self.push(Node::leaf(added))?;
        let node = &mut self.nodes[parent as usize];
        node.children[existing.nibble(diverge) as usize] = old_leaf;
        node.children[added.nibble(diverge) as usize] = new_leaf;
        Ok(())
    }

    fn push(&mut self, node: Node) -> Result<NodeIndex, OidError> {
        let idx = NodeIndex::try_from(self.nodes.len()).map_err(|_| OidError::CapacityExceeded {
            capacity: self.capacity,
        })?;
        self.nodes.push(node);
        Ok(idx)
    }

    /// Fold the divergence depth of a new id into the running minimum.
    fn record(&mut self, depth: usize) -> usize {
        if depth > self.min_length {
            trace!(from = self.min_length, to = depth, ids = self.len, "abbreviation length grew");
            self.min_length = depth;
        }
        self.min_length
    }
}
