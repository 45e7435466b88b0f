pub mod dataset;
pub mod debug_view;
pub mod engine;
pub mod locate;
pub mod matcher;
pub mod preprocess;
pub mod rectify;
