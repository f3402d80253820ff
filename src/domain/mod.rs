pub mod align;
pub mod column_config;
pub mod layout;
pub mod options;
pub mod style;
pub mod table;

pub use align::{AlignMode, AnchorPolicy, PaddingSide, RightJustify, TextAlign};
pub use column_config::{ColumnConfig, ColumnConfigs};
pub use layout::{AlignmentResult, ColumnLayout};
pub use options::{AlignmentOptions, AlignmentOptionsBuilder, OptionsError};
pub use style::{CellStyle, FontContext};
pub use table::{CellRef, ColumnCells, TableId, TableSnapshot, TableTarget};
