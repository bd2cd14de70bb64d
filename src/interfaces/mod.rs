pub mod formatting;
pub mod report;

#[cfg(feature = "ui")]
pub mod design_system;
#[cfg(feature = "ui")]
pub mod ui;
