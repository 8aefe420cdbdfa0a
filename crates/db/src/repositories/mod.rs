pub mod invites;
pub mod users;
