//! # Component Registry
//!
//! Maps component type names to renderers. The registry is an ordinary value
//! handed to whoever renders; there is no process-wide table.

use std::collections::HashMap;
use std::fmt;

use crate::{Block, BlockKind, Document, EditorConfig};

/// Produces the display form of an embedded component
pub trait ComponentRenderer: Send + Sync {
    fn render(&self) -> String;
}

/// Renders a component as a fixed label
#[derive(Debug, Clone)]
pub struct Label(pub String);

impl ComponentRenderer for Label {
    fn render(&self) -> String {
        self.0.clone()
    }
}

/// Lookup table from component type to renderer
#[derive(Default)]
pub struct ComponentRegistry {
    renderers: HashMap<String, Box<dyn ComponentRenderer>>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in chart and image components
    pub fn builtin() -> Self {
        EditorConfig::default().registry()
    }

    /// Add or replace the renderer for `component_type`
    pub fn register(
        &mut self,
        component_type: impl Into<String>,
        renderer: impl ComponentRenderer + 'static,
    ) -> &mut Self {
        self.renderers
            .insert(component_type.into(), Box::new(renderer));
        self
    }

    pub fn contains(&self, component_type: &str) -> bool {
        self.renderers.contains_key(component_type)
    }

    /// Registered component types, sorted
    pub fn component_types(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Display form of a single block
    pub fn render_block(&self, block: &Block) -> String {
        match &block.kind {
            BlockKind::Text { content } => content.clone(),
            BlockKind::Component { component_type } => match self.renderers.get(component_type) {
                Some(renderer) => renderer.render(),
                None => format!("[Unknown component: {}]", component_type),
            },
        }
    }

    /// Display form of every block, in order
    pub fn render(&self, document: &Document) -> Vec<String> {
        document.blocks().map(|block| self.render_block(block)).collect()
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("component_types", &self.component_types())
            .finish()
    }
}
