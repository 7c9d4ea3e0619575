pub mod logging;
pub mod preview;
pub mod print;
