pub mod relay;
pub mod reminder;
