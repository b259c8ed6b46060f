pub mod entity;
pub mod repository;

pub use entity::{NewSliderImage, SliderImage, SliderImageId};
pub use repository::SliderRepository;
