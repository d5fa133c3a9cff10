//! Pointer-drag controller for orbit-style volume viewing
//!
//! Controls (left button held):
//! - Drag: rotate the volume (pixel deltas applied as degrees)
//! - Ctrl + drag: pan the view
//! - Alt + drag: zoom
//!
//! Every drag motion also drops the ray sample count to a low constant for
//! responsiveness; the user-set count is restored exactly on release.

use volcast_core::{RenderParams, INTERACTION_SAMPLE_COUNT};
use winit::event::{ElementState, MouseButton};
use winit::keyboard::ModifiersState;

/// Vertical pixels per unit of zoom delta.
const ZOOM_SENSITIVITY: f32 = 1.0 / 40.0;
/// Pixels per unit of pan delta.
const PAN_SENSITIVITY: f32 = 1.0 / 60.0;

/// Trait for the camera state the controller mutates.
///
/// Clamping of pitch, pan and zoom is the implementor's responsibility, so
/// the invariants live with the camera state itself.
pub trait ViewControl {
    /// Add rotation deltas in degrees (yaw, pitch).
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32);
    /// Add pan deltas on the x and y axes.
    fn pan(&mut self, delta_x: f32, delta_y: f32);
    /// Add a zoom delta along the view axis.
    fn zoom(&mut self, delta: f32);
}

/// Controller for pointer-drag camera input.
pub struct DragController {
    last_position: Option<(f64, f64)>,
    left_pressed: bool,
    modifiers: ModifiersState,
    /// User-set sample count, bridged from press to release.
    saved_num_samples: u32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            last_position: None,
            left_pressed: false,
            modifiers: ModifiersState::empty(),
            saved_num_samples: INTERACTION_SAMPLE_COUNT,
        }
    }

    /// Track the current keyboard modifier state.
    pub fn process_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Process a mouse button transition.
    ///
    /// Press snapshots the current sample count; release restores it.
    /// Returns true if a repaint is needed.
    pub fn process_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        params: &mut RenderParams,
    ) -> bool {
        if button != MouseButton::Left {
            return false;
        }
        match state {
            ElementState::Pressed => {
                self.saved_num_samples = params.num_samples();
                self.left_pressed = true;
                false
            }
            ElementState::Released => {
                self.left_pressed = false;
                params.set_num_samples(self.saved_num_samples);
                true
            }
        }
    }

    /// Process a cursor position update.
    ///
    /// While the left button is held, deltas against the previous position
    /// are dispatched to the camera (rotate, or pan/zoom with modifiers) and
    /// the sample count is forced down for responsiveness. Returns true if a
    /// repaint is needed.
    pub fn process_cursor_moved<C: ViewControl>(
        &mut self,
        position: (f64, f64),
        camera: &mut C,
        params: &mut RenderParams,
    ) -> bool {
        let last = self.last_position.replace(position);
        if !self.left_pressed {
            return false;
        }
        let Some(last) = last else {
            return false;
        };

        params.set_num_samples(INTERACTION_SAMPLE_COUNT);

        let dx = (position.0 - last.0) as f32;
        let dy = (position.1 - last.1) as f32;

        if self.modifiers.alt_key() {
            camera.zoom(-dy * ZOOM_SENSITIVITY);
        } else if self.modifiers.control_key() {
            camera.pan(dx * PAN_SENSITIVITY, -dy * PAN_SENSITIVITY);
        } else {
            camera.rotate(dx, dy);
        }
        true
    }

    /// Whether a left-button drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.left_pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the calls the controller dispatches.
    #[derive(Default)]
    struct RecordingView {
        rotations: Vec<(f32, f32)>,
        pans: Vec<(f32, f32)>,
        zooms: Vec<f32>,
    }

    impl ViewControl for RecordingView {
        fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
            self.rotations.push((delta_yaw, delta_pitch));
        }
        fn pan(&mut self, delta_x: f32, delta_y: f32) {
            self.pans.push((delta_x, delta_y));
        }
        fn zoom(&mut self, delta: f32) {
            self.zooms.push(delta);
        }
    }

    fn press(controller: &mut DragController, params: &mut RenderParams) {
        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed, params);
    }

    fn release(controller: &mut DragController, params: &mut RenderParams) {
        controller.process_mouse_button(MouseButton::Left, ElementState::Released, params);
    }

    #[test]
    fn test_drag_lowers_then_restores_sample_count() {
        let mut controller = DragController::new();
        let mut view = RecordingView::default();
        let mut params = RenderParams::default();
        params.set_num_samples(12);

        controller.process_cursor_moved((10.0, 10.0), &mut view, &mut params);
        press(&mut controller, &mut params);
        controller.process_cursor_moved((15.0, 12.0), &mut view, &mut params);
        assert_eq!(params.num_samples(), INTERACTION_SAMPLE_COUNT);

        release(&mut controller, &mut params);
        assert_eq!(params.num_samples(), 12);
    }

    #[test]
    fn test_low_sample_count_restored_exactly() {
        // A pre-drag count at or below the interactive constant survives
        let mut controller = DragController::new();
        let mut view = RecordingView::default();
        let mut params = RenderParams::default();
        params.set_num_samples(3);

        controller.process_cursor_moved((0.0, 0.0), &mut view, &mut params);
        press(&mut controller, &mut params);
        controller.process_cursor_moved((4.0, 4.0), &mut view, &mut params);
        release(&mut controller, &mut params);
        assert_eq!(params.num_samples(), 3);
    }

    #[test]
    fn test_unmodified_drag_rotates() {
        let mut controller = DragController::new();
        let mut view = RecordingView::default();
        let mut params = RenderParams::default();

        controller.process_cursor_moved((100.0, 100.0), &mut view, &mut params);
        press(&mut controller, &mut params);
        controller.process_cursor_moved((103.0, 98.0), &mut view, &mut params);

        assert_eq!(view.rotations, vec![(3.0, -2.0)]);
        assert!(view.pans.is_empty());
        assert!(view.zooms.is_empty());
    }

    #[test]
    fn test_ctrl_drag_pans() {
        let mut controller = DragController::new();
        let mut view = RecordingView::default();
        let mut params = RenderParams::default();

        controller.process_modifiers(ModifiersState::CONTROL);
        controller.process_cursor_moved((0.0, 0.0), &mut view, &mut params);
        press(&mut controller, &mut params);
        controller.process_cursor_moved((60.0, 60.0), &mut view, &mut params);

        assert_eq!(view.pans, vec![(1.0, -1.0)]);
        assert!(view.rotations.is_empty());
    }

    #[test]
    fn test_alt_drag_zooms() {
        let mut controller = DragController::new();
        let mut view = RecordingView::default();
        let mut params = RenderParams::default();

        controller.process_modifiers(ModifiersState::ALT);
        controller.process_cursor_moved((0.0, 0.0), &mut view, &mut params);
        press(&mut controller, &mut params);
        controller.process_cursor_moved((0.0, 40.0), &mut view, &mut params);

        assert_eq!(view.zooms, vec![-1.0]);
    }

    #[test]
    fn test_motion_without_press_is_ignored() {
        let mut controller = DragController::new();
        let mut view = RecordingView::default();
        let mut params = RenderParams::default();
        params.set_num_samples(42);

        let repaint = controller.process_cursor_moved((5.0, 5.0), &mut view, &mut params);
        assert!(!repaint);
        assert_eq!(params.num_samples(), 42);
        assert!(view.rotations.is_empty());
    }

    #[test]
    fn test_first_motion_after_press_uses_tracked_position() {
        // The position seen before the press anchors the first delta
        let mut controller = DragController::new();
        let mut view = RecordingView::default();
        let mut params = RenderParams::default();

        controller.process_cursor_moved((10.0, 20.0), &mut view, &mut params);
        press(&mut controller, &mut params);
        controller.process_cursor_moved((11.0, 21.0), &mut view, &mut params);
        assert_eq!(view.rotations, vec![(1.0, 1.0)]);
    }
}
