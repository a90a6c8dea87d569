pub mod enrichment_model;
pub mod enrichment_service;
pub mod enrichment_traits;

pub use enrichment_model::{EnrichmentRequest, EnrichmentResponse};
pub use enrichment_service::EnrichmentService;
pub use enrichment_traits::EnrichmentServiceTrait;
