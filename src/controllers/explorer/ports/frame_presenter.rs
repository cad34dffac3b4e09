use crate::controllers::explorer::data::frame_data::FrameData;

pub trait FramePresenterPort {
    fn present(&mut self, frame: &FrameData);
}
