pub mod consts;
pub mod model;
pub mod repository;
pub mod store;
pub mod ui;
