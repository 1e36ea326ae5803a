//! Huffman prefix-code compression with a self-describing bitstream.
//!
//! This crate builds a prefix-free binary code from the byte-frequency
//! distribution of a text, serializes the code tree and the encoded payload
//! into a compact container, and reverses the process to recover the input
//! exactly:
//!
//! - [`FrequencyTable`] accumulates symbol counts and remembers first-seen
//!   order, which seeds the deterministic tie-break during construction.
//! - [`HuffmanTree`] merges the two lowest-count nodes until one remains,
//!   derives the symbol-to-codeword table, and walks codewords back to
//!   symbols when decoding.
//! - [`compress`] and [`decompress`] implement the container format: a
//!   one-byte padding count, the tree's pre-order bit encoding, then the
//!   payload bits.
//!
//! The symbol alphabet is single bytes. Arbitrary byte input round-trips
//! exactly; the tree's leaf slot is fixed at 8 bits, so wider alphabets are
//! out of scope.
//!
//! ```
//! use huffpress::{compress, decompress};
//!
//! let packed = compress(b"so much hello in this world").unwrap();
//! assert_eq!(decompress(&packed).unwrap(), b"so much hello in this world");
//! ```

pub mod codec;
pub mod error;
pub mod frequency;
pub mod io;
pub mod node;
pub mod tree;

pub use codec::{compress, decompress};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use node::Node;
pub use tree::HuffmanTree;
