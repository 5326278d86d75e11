pub mod error;
pub mod intent;
pub mod state;
pub mod validation;
pub mod view_model;
