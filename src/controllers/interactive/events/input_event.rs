/// Everything the explorer reacts to, already translated from the windowing
/// layer. Coordinates are screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer button released: re-centre the view on this point.
    PointerRelease { x: i32, y: i32 },
    PointerMoved { x: i32, y: i32 },
    /// Positive deltas zoom out, negative zoom in.
    Scroll { delta: f32 },
    KeyReset,
    KeyZoomStepUp,
    KeyZoomStepDown,
    KeyOpenColorDialog,
    CloseColorDialog,
    ToggleDebugAxes,
    SubmitColorAndIterations {
        hex_rgba: String,
        max_iterations: String,
    },
    Resize { width: u32, height: u32 },
}
