mod bank;
mod exam;
pub mod layout;
mod menu;
mod summary;

pub use bank::draw_bank;
pub use exam::{draw_exam, draw_submit_confirmation};
pub use layout::{calculate_exam_chunks, calculate_summary_chunks, nav_cell_at};
pub use menu::draw_menu;
pub use summary::draw_summary;
