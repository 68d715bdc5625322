// crates/example_blocks/src/processor/mod.rs

mod code_transform;

pub use code_transform::{apply_transform, CodeTransform, IgnoreTransform, TransformRegistry};
