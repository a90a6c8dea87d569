pub mod constants;
pub mod db;
pub mod enrichment;
pub mod errors;
pub mod feedback;
pub mod schema;
