use crate::core::data::colour::Rgba;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Rgba;
}
