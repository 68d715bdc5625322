// crates/example_blocks/src/processor/code_transform.rs

use strip_ignored::{transform_with, IgnoreOptions, MarkerSet};

use crate::ExampleBlock;

/// Rewrites the code of one example block.
pub trait CodeTransform: Send + Sync {
    fn transform(&self, code: &str) -> String;
}

impl<F> CodeTransform for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn transform(&self, code: &str) -> String {
        self(code)
    }
}

/// Strips ignore-marked lines, with markers resolved once up front.
#[derive(Clone, Debug, Default)]
pub struct IgnoreTransform {
    markers: MarkerSet,
}

impl IgnoreTransform {
    pub fn new(options: &IgnoreOptions) -> Self {
        Self {
            markers: MarkerSet::resolve(options),
        }
    }

    pub fn markers(&self) -> &MarkerSet {
        &self.markers
    }
}

impl CodeTransform for IgnoreTransform {
    fn transform(&self, code: &str) -> String {
        transform_with(code, &self.markers)
    }
}

/// Transforms attached to one parser instance, applied in registration
/// order.
#[derive(Default)]
pub struct TransformRegistry {
    transforms: Vec<Box<dyn CodeTransform>>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, transform: Box<dyn CodeTransform>) {
        self.transforms.push(transform);
    }

    pub fn remove_all(&mut self) {
        self.transforms.clear();
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Runs every registered transform over every block that carries code.
    pub fn apply(&self, blocks: &mut [ExampleBlock]) {
        if self.transforms.is_empty() {
            return;
        }
        visit_code_mut(blocks, &mut |code: &mut String| {
            for transform in &self.transforms {
                *code = transform.transform(code.as_str());
            }
        });
        log::debug!(
            "Applied {} transform(s) to {} block(s)",
            self.transforms.len(),
            blocks.iter().map(ExampleBlock::code_block_count).sum::<usize>()
        );
    }
}

/// Applies a single transform to every code-bearing block in `blocks`.
pub fn apply_transform(blocks: &mut [ExampleBlock], transform: &dyn CodeTransform) {
    visit_code_mut(blocks, &mut |code: &mut String| {
        *code = transform.transform(code.as_str());
    });
}

fn visit_code_mut(blocks: &mut [ExampleBlock], f: &mut dyn FnMut(&mut String)) {
    for block in blocks {
        if let Some(code) = block.code.as_mut() {
            f(code);
        }
        visit_code_mut(&mut block.blocks, f);
    }
}
