//! Retained visual layers.
//!
//! Every widget owns a [`LayerTree`]: a root layer plus ordered children,
//! back to front. Frames are relative to the parent layer. Widgets mutate
//! layers directly; the [`Animator`](crate::animator::Animator) writes
//! animated properties into the same tree; a painter flattens the tree into
//! a display list.

use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::{Color, Error, Path, Rect, Size, Transform, Vec2};

slotmap::new_key_type! {
    pub struct LayerId;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Leading,
    Center,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextContent {
    pub text: String,
    pub color: Color,
    pub font_size: f32,
    pub align: TextAlign,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShapeContent {
    pub path: Path,
    pub fill: Color,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContentMode {
    AspectFit,
    #[default]
    AspectFill,
}

/// A reference to host-owned pixels; the kit only needs the name and the
/// natural size to lay it out.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageContent {
    pub name: String,
    pub size: Size,
    pub mode: ContentMode,
    pub tint: Option<Color>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Content {
    #[default]
    None,
    Text(TextContent),
    Shape(ShapeContent),
    Image(ImageContent),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub frame: Rect,
    pub transform: Transform,
    pub alpha: f32,
    pub hidden: bool,
    pub background: Color,
    pub corner_radius: f32,
    pub border_width: f32,
    pub border_color: Color,
    pub masks_to_bounds: bool,
    pub content: Content,
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            frame: Rect::ZERO,
            transform: Transform::identity(),
            alpha: 1.0,
            hidden: false,
            background: Color::TRANSPARENT,
            corner_radius: 0.0,
            border_width: 0.0,
            border_color: Color::BLACK,
            masks_to_bounds: false,
            content: Content::None,
        }
    }
}

impl Layer {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn masks_to_bounds(mut self, masks: bool) -> Self {
        self.masks_to_bounds = masks;
        self
    }

    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    pub fn center(&self) -> Vec2 {
        self.frame.center()
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.frame = self.frame.with_center(center);
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(t) => Some(&t.text),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut TextContent> {
        match &mut self.content {
            Content::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Replaces the text of a text layer; other layers are left alone.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if let Some(t) = self.text_mut() {
            t.text = text.into();
        }
    }
}

struct Node {
    layer: Layer,
    parent: Option<LayerId>,
    children: SmallVec<[LayerId; 4]>,
}

pub struct LayerTree {
    nodes: SlotMap<LayerId, Node>,
    root: LayerId,
}

impl LayerTree {
    pub fn new(root: Layer) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node {
            layer: root,
            parent: None,
            children: SmallVec::new(),
        });
        Self { nodes, root }
    }

    pub fn root(&self) -> LayerId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.nodes.get(id).map(|n| &n.layer)
    }

    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.nodes.get_mut(id).map(|n| &mut n.layer)
    }

    pub fn root_layer(&self) -> &Layer {
        &self.nodes[self.root].layer
    }

    pub fn root_layer_mut(&mut self) -> &mut Layer {
        let root = self.root;
        &mut self.nodes[root].layer
    }

    pub fn parent(&self, id: LayerId) -> Option<LayerId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Children of `id`, back to front. Empty for unknown ids.
    pub fn children(&self, id: LayerId) -> &[LayerId] {
        self.nodes.get(id).map(|n| &n.children[..]).unwrap_or(&[])
    }

    /// Appends `layer` on top of `parent`'s children.
    pub fn add_child(&mut self, parent: LayerId, layer: Layer) -> Result<LayerId, Error> {
        let index = self.children(parent).len();
        self.insert_child(parent, index, layer)
    }

    /// Inserts `layer` at `index` among `parent`'s children (0 is the back).
    pub fn insert_child(
        &mut self,
        parent: LayerId,
        index: usize,
        layer: Layer,
    ) -> Result<LayerId, Error> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::UnknownLayer(parent));
        }
        let id = self.nodes.insert(Node {
            layer,
            parent: Some(parent),
            children: SmallVec::new(),
        });
        let children = &mut self.nodes[parent].children;
        let index = index.min(children.len());
        children.insert(index, id);
        Ok(id)
    }

    /// Appends on top of the root's children.
    pub fn push(&mut self, layer: Layer) -> LayerId {
        let index = self.nodes[self.root].children.len();
        self.insert_at_root(index, layer)
    }

    /// Inserts among the root's children at `index` (clamped).
    pub fn insert_at_root(&mut self, index: usize, layer: Layer) -> LayerId {
        let root = self.root;
        let id = self.nodes.insert(Node {
            layer,
            parent: Some(root),
            children: SmallVec::new(),
        });
        let children = &mut self.nodes[root].children;
        let index = index.min(children.len());
        children.insert(index, id);
        id
    }

    /// Detaches `id` and its whole subtree, returning the detached layer.
    /// The root cannot be removed.
    pub fn remove(&mut self, id: LayerId) -> Option<Layer> {
        if id == self.root {
            log::warn!("refusing to detach the root layer");
            return None;
        }
        let node = self.nodes.remove(id)?;
        if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(p)) {
            parent.children.retain(|c| *c != id);
        }
        let mut stack: Vec<LayerId> = node.children.to_vec();
        while let Some(child) = stack.pop() {
            if let Some(n) = self.nodes.remove(child) {
                stack.extend(n.children);
            }
        }
        Some(node.layer)
    }

    /// Index of `id` among its siblings.
    pub fn index_in_parent(&self, id: LayerId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|c| *c == id)
    }
}
