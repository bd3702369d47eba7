pub mod chart_render_request;
pub mod chart_spec;
