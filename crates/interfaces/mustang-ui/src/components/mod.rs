pub mod action_grid;
pub mod status_bar;
