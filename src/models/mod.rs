pub mod posting;
pub mod technology;
