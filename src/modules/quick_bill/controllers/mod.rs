pub mod quick_bill_controller;

pub use quick_bill_controller::configure;
