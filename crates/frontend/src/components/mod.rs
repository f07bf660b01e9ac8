pub mod info_panel;
pub mod map_view;
