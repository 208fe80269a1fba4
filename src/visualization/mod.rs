pub mod sink;
pub mod table;
pub mod frame;
pub mod viewer;
