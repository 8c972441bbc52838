pub mod menu_pipeline;
