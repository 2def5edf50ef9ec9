pub mod parser;

pub use parser::parse_quick_bill;
