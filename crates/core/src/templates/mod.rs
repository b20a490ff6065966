//! Daily task templates and `{{placeholder}}` rendering.

mod defaults;
pub mod engine;

pub use defaults::{DEFAULT_TEMPLATE_EN, DEFAULT_TEMPLATE_ZH};
pub use engine::{
    RenderContext, TEMPLATE_VARIABLES, build_render_context, render_string, render_template,
    template_variables,
};
