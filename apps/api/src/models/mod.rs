pub mod posting;
