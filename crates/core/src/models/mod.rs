pub mod ids;
pub mod invite;
