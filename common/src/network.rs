pub mod interface;
pub mod traffic;
