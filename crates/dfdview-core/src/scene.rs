//! The immutable diagram scene.
//!
//! A [`Scene`] is a fixed canvas plus an ordered list of hand-placed
//! elements. It is assembled once through [`SceneBuilder`], which hands every
//! element the same shared style definitions, and is never mutated afterwards.
//! Scenes are `Send + Sync` so a snapshot can be shared with export workers
//! behind an `Arc`.

use std::sync::Arc;

use crate::{
    draw::{
        DataFlow, DataFlowDefinition, DataStore, DataStoreDefinition, Drawable, EntityDefinition,
        ExternalEntity, FlowPath, LayeredOutput, Process, ProcessDefinition, Shadow, SvgNode,
    },
    geometry::{Bounds, Point, Size},
};

/// One element of a scene.
#[derive(Debug, Clone)]
pub enum SceneElement {
    Entity(ExternalEntity),
    Process(Process),
    Store(DataStore),
    Flow(DataFlow),
}

impl SceneElement {
    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            Self::Entity(entity) => entity,
            Self::Process(process) => process,
            Self::Store(store) => store,
            Self::Flow(flow) => flow,
        }
    }
}

impl Drawable for SceneElement {
    fn render_to_layers(&self) -> LayeredOutput {
        self.as_drawable().render_to_layers()
    }

    fn bounds(&self) -> Bounds {
        self.as_drawable().bounds()
    }
}

/// Number of elements of each kind in a scene.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ElementCounts {
    pub entities: usize,
    pub processes: usize,
    pub stores: usize,
    pub flows: usize,
}

/// A fixed canvas and the elements placed on it.
#[derive(Debug, Clone)]
pub struct Scene {
    title: String,
    canvas: Size,
    elements: Vec<SceneElement>,
    flow_definition: Arc<DataFlowDefinition>,
}

impl Scene {
    /// Human-readable title of the diagram.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Size of the canvas, i.e. the SVG view box `0 0 width height`.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Elements in paint order.
    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    pub fn counts(&self) -> ElementCounts {
        self.elements
            .iter()
            .fold(ElementCounts::default(), |mut counts, element| {
                match element {
                    SceneElement::Entity(_) => counts.entities += 1,
                    SceneElement::Process(_) => counts.processes += 1,
                    SceneElement::Store(_) => counts.stores += 1,
                    SceneElement::Flow(_) => counts.flows += 1,
                }
                counts
            })
    }

    /// Bounds of the drawn content, or `None` for an empty scene.
    pub fn content_bounds(&self) -> Option<Bounds> {
        self.elements
            .iter()
            .map(Drawable::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// The `<defs>` children every scene needs: shadow filters and the arrowhead marker.
    pub fn definitions(&self) -> Vec<SvgNode> {
        let mut definitions: Vec<SvgNode> =
            Shadow::ALL.iter().map(|shadow| shadow.definition()).collect();
        definitions.push(self.flow_definition.arrowhead_definition());
        definitions
    }

    /// Renders every element into one layered output.
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for element in &self.elements {
            output.merge(element.render_to_layers());
        }
        output
    }
}

/// Assembles a [`Scene`] with shared style definitions.
///
/// # Examples
///
/// ```
/// # use dfdview_core::geometry::{Point, Size};
/// # use dfdview_core::scene::SceneBuilder;
/// let scene = SceneBuilder::new("Login", Size::new(800.0, 400.0))
///     .entity(Point::new(50.0, 100.0), "User")
///     .process(Point::new(500.0, 135.0), "1.1", "Login/Signup\nusing Gmail")
///     .flow([Point::new(190.0, 135.0), Point::new(435.0, 135.0)], "Login Request")
///     .build();
///
/// assert_eq!(scene.elements().len(), 3);
/// ```
#[derive(Debug)]
pub struct SceneBuilder {
    title: String,
    canvas: Size,
    elements: Vec<SceneElement>,
    entity_definition: Arc<EntityDefinition>,
    process_definition: Arc<ProcessDefinition>,
    store_definition: Arc<DataStoreDefinition>,
    flow_definition: Arc<DataFlowDefinition>,
}

impl SceneBuilder {
    /// Starts a scene with the default palette.
    pub fn new(title: impl Into<String>, canvas: Size) -> Self {
        Self {
            title: title.into(),
            canvas,
            elements: Vec::new(),
            entity_definition: Arc::new(EntityDefinition::default()),
            process_definition: Arc::new(ProcessDefinition::default()),
            store_definition: Arc::new(DataStoreDefinition::default()),
            flow_definition: Arc::new(DataFlowDefinition::default()),
        }
    }

    /// Adds an external entity of the default size.
    pub fn entity(self, top_left: Point, label: &str) -> Self {
        let entity = ExternalEntity::new(Arc::clone(&self.entity_definition), top_left, label);
        self.push(SceneElement::Entity(entity))
    }

    /// Adds an external entity with an explicit size.
    pub fn entity_sized(self, top_left: Point, size: Size, label: &str) -> Self {
        let entity = ExternalEntity::new(Arc::clone(&self.entity_definition), top_left, label)
            .with_size(size);
        self.push(SceneElement::Entity(entity))
    }

    /// Adds a process of the default radius.
    pub fn process(self, center: Point, number: &str, label: &str) -> Self {
        let process = Process::new(Arc::clone(&self.process_definition), center, number, label);
        self.push(SceneElement::Process(process))
    }

    /// Adds a data store of the default size.
    pub fn store(self, top_left: Point, id: &str, label: &str) -> Self {
        let store = DataStore::new(Arc::clone(&self.store_definition), top_left, id, label);
        self.push(SceneElement::Store(store))
    }

    /// Adds a straight or bent flow through `points`.
    ///
    /// Fewer than two points cannot form a path; such a flow is skipped with a
    /// warning.
    pub fn flow(self, points: impl IntoIterator<Item = Point>, label: &str) -> Self {
        match FlowPath::polyline(points) {
            Some(path) => self.flow_path(path, label),
            None => {
                log::warn!(label; "Skipping data flow with fewer than two points");
                self
            }
        }
    }

    /// Adds a quadratic flow whose bend is derived from its endpoints.
    pub fn curved_flow(self, start: Point, end: Point, label: &str) -> Self {
        self.flow_path(FlowPath::Quadratic { start, end }, label)
    }

    /// Adds a cubic flow with explicit control points.
    pub fn cubic_flow(
        self,
        start: Point,
        end: Point,
        controls: [Point; 2],
        label: &str,
    ) -> Self {
        let [control1, control2] = controls;
        self.flow_path(
            FlowPath::Cubic {
                start,
                control1,
                control2,
                end,
            },
            label,
        )
    }

    /// Adds a flow along an already built path.
    pub fn flow_path(self, path: FlowPath, label: &str) -> Self {
        let flow = DataFlow::new(Arc::clone(&self.flow_definition), path, label);
        self.push(SceneElement::Flow(flow))
    }

    pub fn build(self) -> Scene {
        log::debug!(
            title = self.title.as_str(),
            elements = self.elements.len();
            "Scene built"
        );
        Scene {
            title: self.title,
            canvas: self.canvas,
            elements: self.elements,
            flow_definition: self.flow_definition,
        }
    }

    fn push(mut self, element: SceneElement) -> Self {
        self.elements.push(element);
        self
    }
}
