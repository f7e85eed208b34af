//! Job handler implementations.

pub mod enrichment;

pub use enrichment::EnrichmentJobHandler;
