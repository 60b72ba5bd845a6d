use std::time::Duration;

use crate::core::data::frame_buffer::FrameBuffer;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub frame_buffer: FrameBuffer,
    pub render_duration: Duration,
}
