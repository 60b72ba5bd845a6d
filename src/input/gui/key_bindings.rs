use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::interactive::events::input_event::InputEvent;
use crate::core::data::point::Point;

/// Wheel distance treated as one notch for pixel-precise devices.
const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub enum GuiAction {
    Explorer(InputEvent),
    Exit,
}

/// Turns raw window events into explorer input. Remembers the last cursor
/// position so button releases know where they happened, and gathers wheel
/// movement until it adds up to whole notches.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: Option<Point>,
    scroll_remainder: f32,
}

impl InputTranslator {
    pub fn translate(&mut self, event: &WindowEvent) -> Option<GuiAction> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let point = cursor_point(*position);
                self.cursor = Some(point);
                Some(GuiAction::Explorer(InputEvent::PointerMoved {
                    x: point.x,
                    y: point.y,
                }))
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => self.cursor.map(|point| {
                GuiAction::Explorer(InputEvent::PointerRelease {
                    x: point.x,
                    y: point.y,
                })
            }),
            WindowEvent::MouseWheel { delta, .. } => self
                .accumulate_scroll(scroll_delta(*delta))
                .map(|delta| GuiAction::Explorer(InputEvent::Scroll { delta })),
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                match event.physical_key {
                    PhysicalKey::Code(code) => key_action(code),
                    PhysicalKey::Unidentified(_) => None,
                }
            }
            _ => None,
        }
    }

    /// Adds `delta` to the pending wheel movement and returns the whole
    /// notches it completes, if any.
    pub fn accumulate_scroll(&mut self, delta: f32) -> Option<f32> {
        if !delta.is_finite() {
            return None;
        }

        self.scroll_remainder += delta;
        let notches = self.scroll_remainder.trunc();
        if notches == 0.0 {
            return None;
        }
        self.scroll_remainder -= notches;

        Some(notches)
    }
}

#[must_use]
pub fn key_action(code: KeyCode) -> Option<GuiAction> {
    let event = match code {
        KeyCode::Escape => return Some(GuiAction::Exit),
        KeyCode::Space => InputEvent::KeyReset,
        KeyCode::PageUp => InputEvent::KeyZoomStepUp,
        KeyCode::PageDown => InputEvent::KeyZoomStepDown,
        KeyCode::Enter | KeyCode::NumpadEnter => InputEvent::KeyOpenColorDialog,
        KeyCode::KeyD => InputEvent::ToggleDebugAxes,
        _ => return None,
    };

    Some(GuiAction::Explorer(event))
}

/// Explorer scroll delta for a wheel event. winit reports wheel-down as
/// negative, the explorer expects it positive (zoom out).
#[must_use]
pub fn scroll_delta(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y,
        MouseScrollDelta::PixelDelta(position) => -(position.y as f32) / PIXELS_PER_SCROLL_LINE,
    }
}

#[must_use]
pub fn cursor_point(position: PhysicalPosition<f64>) -> Point {
    Point {
        x: position.x as i32,
        y: position.y as i32,
    }
}
