//! Flattens a widget's layer tree into a display list a renderer can replay.
//!
//! Nodes are emitted back to front in absolute coordinates with layer
//! transforms and opacity already applied. Per layer the order is:
//! background, content, children (inside a clip when the layer masks to its
//! bounds), border.

use std::fmt;

use roundel_core::*;
use roundel_ui::Widget;

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        color: Color,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
        align: TextAlign,
    },
    /// `path` is in a `source`-sized box, stretched onto `rect`.
    Path {
        rect: Rect,
        path: Path,
        source: Size,
        color: Color,
    },
    Image {
        rect: Rect,
        name: String,
        tint: Option<Color>,
    },
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

struct R(Rect);

impl fmt::Display for R {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        write!(f, "({:.1}, {:.1}, {:.1}, {:.1})", r.x, r.y, r.w, r.h)
    }
}

/// One line per node, for logs and snapshots.
impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match node {
                SceneNode::Rect { rect, color, radius } => {
                    write!(f, "rect {} {color} r={radius:.1}", R(*rect))?
                }
                SceneNode::Border {
                    rect,
                    color,
                    width,
                    radius,
                } => write!(f, "border {} {color} w={width:.1} r={radius:.1}", R(*rect))?,
                SceneNode::Text {
                    rect,
                    text,
                    color,
                    size,
                    ..
                } => write!(f, "text {} {text:?} {color} {size:.1}", R(*rect))?,
                SceneNode::Path {
                    rect, path, color, ..
                } => write!(
                    f,
                    "path {} {color} segments={}",
                    R(*rect),
                    path.segments().len()
                )?,
                SceneNode::Image { rect, name, tint } => {
                    write!(f, "image {} {name:?}", R(*rect))?;
                    if let Some(tint) = tint {
                        write!(f, " tint={tint}")?;
                    }
                }
                SceneNode::PushClip { rect, radius } => {
                    write!(f, "clip {} r={radius:.1}", R(*rect))?
                }
                SceneNode::PopClip => write!(f, "unclip")?,
            }
        }
        Ok(())
    }
}

/// Records nodes for one paint pass.
#[derive(Default)]
pub struct DrawScope {
    nodes: Vec<SceneNode>,
    clip_depth: usize,
}

impl DrawScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        if color.is_transparent() {
            return;
        }
        self.nodes.push(SceneNode::Rect {
            rect,
            color,
            radius,
        });
    }

    pub fn draw_border(&mut self, rect: Rect, color: Color, width: f32, radius: f32) {
        if width <= 0.0 || color.is_transparent() {
            return;
        }
        self.nodes.push(SceneNode::Border {
            rect,
            color,
            width,
            radius,
        });
    }

    pub fn draw_text(&mut self, rect: Rect, text: &TextContent, alpha: f32, scale: f32) {
        if text.text.is_empty() {
            return;
        }
        self.nodes.push(SceneNode::Text {
            rect,
            text: text.text.clone(),
            color: text.color.mul_alpha(alpha),
            size: text.font_size * scale,
            align: text.align,
        });
    }

    pub fn draw_path(&mut self, rect: Rect, path: &Path, source: Size, color: Color) {
        if path.is_empty() || color.is_transparent() {
            return;
        }
        self.nodes.push(SceneNode::Path {
            rect,
            path: path.clone(),
            source,
            color,
        });
    }

    pub fn draw_image(&mut self, rect: Rect, image: &ImageContent, alpha: f32) {
        self.nodes.push(SceneNode::Image {
            rect,
            name: image.name.clone(),
            tint: image.tint.map(|c| c.mul_alpha(alpha)),
        });
    }

    pub fn push_clip(&mut self, rect: Rect, radius: f32) {
        self.clip_depth += 1;
        self.nodes.push(SceneNode::PushClip { rect, radius });
    }

    pub fn pop_clip(&mut self) {
        if self.clip_depth == 0 {
            log::warn!("unbalanced pop_clip ignored");
            return;
        }
        self.clip_depth -= 1;
        self.nodes.push(SceneNode::PopClip);
    }

    pub fn finish(mut self) -> Scene {
        while self.clip_depth > 0 {
            self.pop_clip();
        }
        Scene { nodes: self.nodes }
    }
}

/// The layer's own transform, applied about its frame center, as a map on
/// its parent's coordinates.
fn layer_map(layer: &Layer) -> Transform {
    let t = layer.transform;
    let c = layer.frame.center();
    Transform {
        translate_x: c.x * (1.0 - t.scale_x) + t.translate_x,
        translate_y: c.y * (1.0 - t.scale_y) + t.translate_y,
        scale_x: t.scale_x,
        scale_y: t.scale_y,
    }
}

fn map_rect(m: &Transform, r: Rect) -> Rect {
    Rect::new(
        r.x * m.scale_x + m.translate_x,
        r.y * m.scale_y + m.translate_y,
        r.w * m.scale_x,
        r.h * m.scale_y,
    )
}

fn paint_layer(
    tree: &LayerTree,
    id: LayerId,
    parent: &Transform,
    alpha: f32,
    scope: &mut DrawScope,
) {
    let Some(layer) = tree.get(id) else {
        return;
    };
    let alpha = alpha * layer.alpha;
    if layer.hidden || alpha <= 0.0 {
        return;
    }

    let map = layer_map(layer).then(parent);
    let rect = map_rect(&map, layer.frame);
    let scale = map.scale_x.min(map.scale_y);
    let radius = layer.corner_radius * scale;

    scope.draw_rect(rect, layer.background.mul_alpha(alpha), radius);
    match &layer.content {
        Content::None => {}
        Content::Text(text) => scope.draw_text(rect, text, alpha, map.scale_y),
        Content::Shape(shape) => {
            scope.draw_path(rect, &shape.path, layer.frame.size(), shape.fill.mul_alpha(alpha))
        }
        Content::Image(image) => scope.draw_image(rect, image, alpha),
    }

    let children = tree.children(id);
    if !children.is_empty() {
        let clip = layer.masks_to_bounds;
        if clip {
            scope.push_clip(rect, radius);
        }
        let child_map = Transform::translate(layer.frame.x, layer.frame.y).then(&map);
        for child in children {
            paint_layer(tree, *child, &child_map, alpha, scope);
        }
        if clip {
            scope.pop_clip();
        }
    }

    scope.draw_border(
        rect,
        layer.border_color.mul_alpha(alpha),
        layer.border_width * scale,
        radius,
    );
}

/// Paints `tree` with its root's frame origin at `origin`.
pub fn paint_at(tree: &LayerTree, origin: Vec2) -> Scene {
    let mut scope = DrawScope::new();
    let root = tree.root_layer().frame;
    let base = Transform::translate(origin.x - root.x, origin.y - root.y);
    paint_layer(tree, tree.root(), &base, 1.0, &mut scope);
    scope.finish()
}

/// Paints `tree` in its root layer's own coordinates.
pub fn paint(tree: &LayerTree) -> Scene {
    let root = tree.root_layer().frame;
    paint_at(tree, Vec2::new(root.x, root.y))
}

pub fn paint_widget(widget: &dyn Widget) -> Scene {
    paint(widget.layers())
}

pub mod tests;
