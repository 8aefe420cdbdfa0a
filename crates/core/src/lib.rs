pub mod errors;
pub mod invite;
pub mod models;
