pub mod cell_text;
pub mod layout;
pub mod status_bar;
pub mod table_view;
pub mod title_bar;

pub use layout::MainLayout;
pub use table_view::{TableView, render_table_lines};
