// Verse retrieval and record assembly.
// The upstream data source sits behind `VerseFetcher`; everything else is pure.

pub mod assembler;
pub mod explanation;
pub mod fetcher;
pub mod handlers;
pub mod models;
pub mod quran_api;
pub mod service;
