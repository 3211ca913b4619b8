//! PokeAPI species lookups

pub mod client;

pub use client::{PokeApiClient, SpeciesLookup};
