pub mod movies;
pub mod trending;
