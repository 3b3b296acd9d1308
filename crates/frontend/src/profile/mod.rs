pub mod model;
pub mod sections;
pub mod view;
pub mod view_model;
