mod invoice;
mod line_item;
mod party;

pub use invoice::Invoice;
pub use line_item::LineItem;
pub use party::Party;
