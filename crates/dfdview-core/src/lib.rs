//! dfdview Core Types
//!
//! This crate provides the foundational types for rendering a static data-flow
//! diagram in a pannable, zoomable viewport. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and affine transforms ([`geometry`] module)
//! - **Draw**: Visual definitions and drawables for DFD elements ([`draw`] module)
//! - **Scene**: The immutable diagram description ([`scene::Scene`])
//! - **Viewport**: Pan/zoom state and the drag state machine ([`viewport::ViewportController`])

pub mod color;
pub mod draw;
pub mod geometry;
pub mod scene;
pub mod viewport;
