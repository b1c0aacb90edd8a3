// Domain layer - Value types and pure derivations
pub mod query;
pub mod series;
