//! Small rendering helpers shared by the panes

pub mod scrollbar;
