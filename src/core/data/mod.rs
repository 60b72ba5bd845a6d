pub mod colour;
pub mod complex;
pub mod frame_buffer;
pub mod plane_bounds;
pub mod point;
pub mod view_state;
pub mod viewport;
