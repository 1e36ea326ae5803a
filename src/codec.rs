//! The byte-level container format.
//!
//! A compressed stream is one header byte holding the padding count `p`
//! (0..=7), followed by the serialized tree and then the payload — every
//! input symbol's codeword concatenated in input order. The tree is not
//! byte-aligned, so the whole bit catenation after the header is zero-padded
//! on the right with `p` bits to reach a byte boundary. Empty input maps to
//! an empty output with no header at all, and both directions agree on that
//! convention.

use bitvec::prelude::*;
use log::debug;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;

/// Compresses `input` into the container format.
///
/// # Example
///
/// ```
/// use huffpress::{compress, decompress};
///
/// let packed = compress(b"abracadabra").unwrap();
/// assert_eq!(decompress(&packed).unwrap(), b"abracadabra");
/// ```
///
/// An input with a single distinct symbol produces a header and tree but no
/// payload bits: the lone codeword is empty, so occurrence counts are not
/// representable and such a stream decompresses to empty output. Callers
/// that must round-trip such inputs need a second distinct byte.
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut table = FrequencyTable::new();
    table.add(input);
    let tree = HuffmanTree::from_frequencies(&table);

    let mut bits: BitVec<u8, Msb0> = BitVec::new();
    tree.serialize_into(&mut bits);
    for &symbol in input {
        bits.extend_from_bitslice(tree.codeword(symbol)?);
    }

    let padding = (8 - bits.len() % 8) % 8;
    for _ in 0..padding {
        bits.push(false);
    }
    debug!(
        "compressed {} bytes into {} bits ({} of padding)",
        input.len(),
        bits.len(),
        padding
    );

    let mut output = Vec::with_capacity(1 + bits.len() / 8);
    output.push(padding as u8);
    output.extend_from_slice(&bits.into_vec());
    Ok(output)
}

/// Decompresses a container produced by [`compress`].
///
/// Fails with [`Error::MalformedStream`] if the header is out of range, the
/// tree is truncated, or the payload does not decode to whole codewords.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let padding = input[0] as usize;
    if padding > 7 {
        return Err(Error::MalformedStream("padding header out of range"));
    }

    let bits = input[1..].view_bits::<Msb0>();
    let (tree, rest) = HuffmanTree::from_bits(bits)?;
    if rest.len() < padding {
        return Err(Error::MalformedStream("padding exceeds remaining bits"));
    }
    let payload = &rest[..rest.len() - padding];
    debug!("decoding {} payload bits", payload.len());
    tree.decode_all(payload)
}
