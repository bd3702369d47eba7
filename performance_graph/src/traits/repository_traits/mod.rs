pub mod chart_render_repository;
