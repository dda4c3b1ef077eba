pub mod character;
pub mod logging;
