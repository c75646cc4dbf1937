//! Text and markup helpers shared by the resolver and renderer.

pub mod html;
pub mod text;
