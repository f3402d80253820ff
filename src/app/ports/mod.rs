pub mod renderer;
pub mod table_access;
pub mod text_measurer;

pub use renderer::Renderer;
pub use table_access::{TableAccess, TableHost};
pub use text_measurer::TextMeasurer;

#[cfg(test)]
pub use text_measurer::MockTextMeasurer;
