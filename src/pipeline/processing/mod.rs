// Pipeline processing: parsing, classification, field transforms and schema finalization

pub mod classify;
pub mod finalize;
pub mod normalize;
pub mod parser;
