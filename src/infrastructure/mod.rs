pub mod hygraph;
