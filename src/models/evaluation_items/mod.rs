pub mod entities;
pub mod plan;
pub mod requests;
pub mod responses;
