pub mod header;
pub mod upload_area;
pub mod analyze_button;
pub mod error_banner;
pub mod result_panel;
