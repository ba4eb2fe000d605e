#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Leaf nodes must have a value")]
    MissingValue,
    #[error("ParentNode must have a tag")]
    MissingTag,
    #[error("ParentNode must have children")]
    MissingChildren,
}
