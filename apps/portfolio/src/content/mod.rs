// Portfolio content: data model, compiled-in defaults, the generator seam,
// and the cache → generation → defaults resolution chain.

pub mod defaults;
pub mod generator;
pub mod models;
pub mod resolver;
