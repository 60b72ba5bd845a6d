/// Whether the current frame reflects the view state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderState {
    #[default]
    Idle,
    /// The view changed since the last frame; exactly one render is owed.
    Dirty,
}
