//! UI Components
//!
//! Leptos components for the board, its sections and their tasks.

mod board_header;
mod board_view;
mod char_counter;
mod notice_bar;
mod remove_confirm;
mod section_column;
mod task_adder;
mod task_card;

pub use board_header::BoardHeader;
pub use board_view::BoardView;
pub use char_counter::CharCounter;
pub use notice_bar::NoticeBar;
pub use remove_confirm::RemoveConfirm;
pub use section_column::SectionColumn;
pub use task_adder::TaskAdder;
pub use task_card::TaskCard;
