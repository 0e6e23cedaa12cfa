// Frame generation pipeline.
// Implements: layout sizing, per-frame templates, provider rendering, orchestration.
// All provider calls go through `provider::RenderProvider`.

pub mod handlers;
pub mod markup;
pub mod palette;
pub mod pipeline;
pub mod renderer;
pub mod sizing;
pub mod template;

#[cfg(test)]
pub mod test_support;
