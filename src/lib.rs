//! Metadata-driven JSON encoding and decoding for generated Conjure types.

/// Type descriptors, the native value tree, and the decoder and encoder that walk them.
pub mod wire;
