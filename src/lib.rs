pub mod aggregator;  // Fire-and-fold orchestration over the four sources
pub mod client;      // Indexer/DEX HTTP boundary
pub mod constants;
pub mod models;
pub mod render;      // Stat grid output
pub mod slots;
pub mod stats;       // Pure derivation
pub mod utils;
