// Presentation layer - Renderer-facing payloads
pub mod chart_payload;
