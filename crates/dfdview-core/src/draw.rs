//! Visual definitions and drawables for data-flow diagram elements.
//!
//! Every scene element is a [`Drawable`]: it knows its own absolute placement,
//! reports its [`Bounds`](crate::geometry::Bounds), and renders its SVG nodes
//! into a [`LayeredOutput`] so that z-order is decided by layer rather than by
//! insertion order.
//!
//! Styling lives in shared definition structs ([`EntityDefinition`],
//! [`ProcessDefinition`], [`DataStoreDefinition`], [`DataFlowDefinition`]) whose
//! defaults reproduce the diagram's palette.

mod data_flow;
mod data_store;
mod entity;
mod filter;
mod layer;
mod process;
mod stroke;
mod text;

pub use data_flow::{ARROWHEAD_ID, DataFlow, DataFlowDefinition, FlowPath, Polyline};
pub use data_store::{DataStore, DataStoreDefinition};
pub use entity::{EntityDefinition, ExternalEntity};
pub use filter::Shadow;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use process::{Process, ProcessDefinition};
pub use stroke::StrokeDefinition;
pub use text::{FontWeight, Text, TextAnchor, TextDefinition};

use crate::geometry::Bounds;

/// A scene element that can render itself to layered SVG output.
pub trait Drawable: std::fmt::Debug {
    /// Renders this element to SVG nodes grouped by [`RenderLayer`].
    fn render_to_layers(&self) -> LayeredOutput;

    /// The area this element covers in scene coordinates.
    fn bounds(&self) -> Bounds;
}
