// crates/example_blocks/src/lib.rs

//! The example-block records produced by a describe/it source parser, and
//! the hook that rewrites their code before they are rendered.
//!
//! Parsing test files into blocks happens elsewhere; this crate only owns
//! the tree shape and the transforms applied to it.

pub mod processor;

pub use processor::{apply_transform, CodeTransform, IgnoreTransform, TransformRegistry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    /// A `describe()` group. Holds child blocks, no code.
    Describe,
    /// An `it()` example. Holds the code shown in the docs.
    It,
}

/// One node of the parsed example tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleBlock {
    pub kind: BlockKind,
    /// The block's title, e.g. the first argument to `it()`.
    pub contents: String,
    /// Doc comments attached to the block.
    pub comments: Vec<String>,
    pub code: Option<String>,
    pub blocks: Vec<ExampleBlock>,
}

impl ExampleBlock {
    pub fn describe(contents: impl Into<String>, blocks: Vec<ExampleBlock>) -> Self {
        Self {
            kind: BlockKind::Describe,
            contents: contents.into(),
            comments: Vec::new(),
            code: None,
            blocks,
        }
    }

    pub fn it(contents: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::It,
            contents: contents.into(),
            comments: Vec::new(),
            code: Some(code.into()),
            blocks: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    /// Number of code-bearing blocks in this subtree, this one included.
    pub fn code_block_count(&self) -> usize {
        let own = usize::from(self.code.is_some());
        own + self.blocks.iter().map(ExampleBlock::code_block_count).sum::<usize>()
    }
}
