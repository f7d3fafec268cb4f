//! Serialize a document tree into LaTeX markup

mod renderer;

pub use renderer::{format_options, render, render_node, INDENT};
