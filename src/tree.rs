//! Huffman tree construction, codeword derivation, and stream decoding.

use std::collections::{HashMap, VecDeque};

use bitvec::prelude::*;
use log::trace;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::node::Node;

/// A Huffman tree together with its derived code table.
///
/// The code table is a pure function of the tree shape: it is built once,
/// right after construction, and never mutated afterward. A tree built from
/// an empty [`FrequencyTable`] has no root and an empty table.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    root: Option<Node>,
    codes: HashMap<u8, BitVec<u8, Msb0>>,
}

impl HuffmanTree {
    /// Builds the tree for the given frequency distribution.
    ///
    /// Construction repeatedly merges the two lowest-count nodes until one
    /// remains, using two queues: leaves pre-sorted ascending by count
    /// (stable, so equal-count leaves keep their first-seen order) and a
    /// FIFO of merged nodes. On a count tie the leaf queue wins, because its
    /// nodes entered the pool before any merged node of the same weight.
    /// The first node popped becomes the left child. This makes the tree
    /// shape, and therefore every codeword, a deterministic function of the
    /// frequency table.
    pub fn from_frequencies(table: &FrequencyTable) -> Self {
        let mut leaves: Vec<Node> = table
            .symbols()
            .map(|(symbol, count)| Node::Leaf { count, symbol })
            .collect();
        leaves.sort_by_key(Node::count);
        trace!("constructing tree from {} distinct symbols", leaves.len());

        let mut leaves: VecDeque<Node> = leaves.into();
        let mut merged: VecDeque<Node> = VecDeque::new();
        while leaves.len() + merged.len() > 1 {
            let left = Self::pop_min(&mut leaves, &mut merged);
            let right = Self::pop_min(&mut leaves, &mut merged);
            merged.push_back(Node::Internal {
                count: left.count() + right.count(),
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        let root = leaves.pop_front().or_else(|| merged.pop_front());
        let mut codes = HashMap::new();
        if let Some(root) = &root {
            build_codes(root, BitVec::new(), &mut codes);
        }
        Self { root, codes }
    }

    /// Pops the lowest-count node; leaves win ties against merged nodes.
    fn pop_min(leaves: &mut VecDeque<Node>, merged: &mut VecDeque<Node>) -> Node {
        match (leaves.front(), merged.front()) {
            (Some(leaf), Some(node)) if leaf.count() <= node.count() => {
                leaves.pop_front().unwrap()
            }
            (Some(_), None) => leaves.pop_front().unwrap(),
            (_, Some(_)) => merged.pop_front().unwrap(),
            (None, None) => unreachable!("pop_min called with both queues empty"),
        }
    }

    /// Rebuilds a tree from its wire encoding, returning the unconsumed
    /// remainder of `bits` (the payload plus any trailing padding).
    pub fn from_bits(bits: &BitSlice<u8, Msb0>) -> Result<(Self, &BitSlice<u8, Msb0>)> {
        let (root, rest) = Node::deserialize(bits)?;
        let mut codes = HashMap::new();
        build_codes(&root, BitVec::new(), &mut codes);
        let tree = Self {
            root: Some(root),
            codes,
        };
        Ok((tree, rest))
    }

    /// The root node, if any symbols were present.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// True if the tree was built from zero symbols.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Looks up the codeword for `symbol`.
    ///
    /// A lone-leaf tree maps its symbol to the empty codeword. Fails with
    /// [`Error::UnknownSymbol`] if the symbol was never counted — asking for
    /// it is a caller contract violation, not a recoverable condition.
    pub fn codeword(&self, symbol: u8) -> Result<&BitSlice<u8, Msb0>> {
        self.codes
            .get(&symbol)
            .map(BitVec::as_bitslice)
            .ok_or(Error::UnknownSymbol(symbol))
    }

    /// Iterates over all `(symbol, codeword)` pairs.
    pub fn codewords(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Appends the tree's wire encoding to `bits`. An empty tree emits
    /// nothing.
    pub fn serialize_into(&self, bits: &mut BitVec<u8, Msb0>) {
        if let Some(root) = &self.root {
            root.serialize_into(bits);
        }
    }

    /// Decodes a single symbol from the front of `stream`, returning it with
    /// the unconsumed remainder.
    ///
    /// Walks from the root, taking the left child on a `0` bit and the right
    /// child on a `1`. A lone-leaf root yields its symbol without consuming
    /// any bits. Fails with [`Error::MalformedStream`] if the stream ends
    /// mid-walk or the tree is empty.
    pub fn decode_one<'a>(
        &self,
        stream: &'a BitSlice<u8, Msb0>,
    ) -> Result<(u8, &'a BitSlice<u8, Msb0>)> {
        let mut node = self
            .root
            .as_ref()
            .ok_or(Error::MalformedStream("decode against an empty tree"))?;
        let mut rest = stream;
        loop {
            match node {
                Node::Leaf { symbol, .. } => return Ok((*symbol, rest)),
                Node::Internal { left, right, .. } => {
                    let (bit, tail) = rest
                        .split_first()
                        .ok_or(Error::MalformedStream("bitstream ended inside a codeword"))?;
                    node = if *bit { right } else { left };
                    rest = tail;
                }
            }
        }
    }

    /// Decodes the whole payload into the original symbol sequence.
    ///
    /// A lone-leaf tree rejects any non-empty payload: its codeword is empty,
    /// so payload bits cannot be attributed to symbols and the walk would
    /// never consume them.
    pub fn decode_all(&self, payload: &BitSlice<u8, Msb0>) -> Result<Vec<u8>> {
        if payload.is_empty() {
            return Ok(Vec::new());
        }
        if matches!(self.root, Some(Node::Leaf { .. })) {
            return Err(Error::MalformedStream("payload bits for a single-leaf tree"));
        }
        let mut decoded = Vec::new();
        let mut rest = payload;
        while !rest.is_empty() {
            let (symbol, tail) = self.decode_one(rest)?;
            decoded.push(symbol);
            rest = tail;
        }
        Ok(decoded)
    }
}

/// Recursively derives codewords: `0` per left edge, `1` per right edge.
/// A lone leaf root receives the empty codeword.
fn build_codes(node: &Node, prefix: BitVec<u8, Msb0>, codes: &mut HashMap<u8, BitVec<u8, Msb0>>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            let mut path = prefix.clone();
            path.push(false);
            build_codes(left, path, codes);

            let mut path = prefix;
            path.push(true);
            build_codes(right, path, codes);
        }
    }
}
