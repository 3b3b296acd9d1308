pub mod eoi;
pub mod notification;
pub mod profile;
pub mod service_request;
pub mod work_order;
