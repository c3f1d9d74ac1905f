//! Value model integration tests
//!
//! Tests mirroring the source module structure in src/

mod accessors;
mod codec;
mod merge;
mod ordering;
mod path;
mod render;
