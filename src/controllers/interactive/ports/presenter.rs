use crate::controllers::interactive::data::frame_data::FrameData;

pub trait FramePresenterPort {
    fn present(&mut self, frame: &FrameData);
}
