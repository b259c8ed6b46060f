// src/domain/slider/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::slider::entity::{NewSliderImage, SliderImage, SliderImageId};
use async_trait::async_trait;

#[async_trait]
pub trait SliderRepository: Send + Sync {
    async fn insert(&self, image: NewSliderImage) -> DomainResult<SliderImage>;
    /// Ordered by `orden` ascending.
    async fn list(&self) -> DomainResult<Vec<SliderImage>>;
    async fn delete(&self, id: SliderImageId) -> DomainResult<()>;
    async fn max_orden(&self) -> DomainResult<Option<i32>>;
    async fn set_orden(&self, id: SliderImageId, orden: i32) -> DomainResult<()>;
}
