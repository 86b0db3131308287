use thiserror::Error;

/// A broken heap invariant, as reported by `check_integrity`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("node at index {parent} is greater than its child at index {child}")]
    HeapOrder { parent: usize, child: usize },
    #[error("node at index {index} does not store its own value as ordering key")]
    KeyMismatch { index: usize },
}
