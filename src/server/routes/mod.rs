pub mod characters;
pub mod conversations;
pub mod lines;
pub mod movies;
