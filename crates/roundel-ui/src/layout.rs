//! Edge-anchored child placement, resolved with taffy.

use roundel_core::{Error, Rect, Size};
use taffy::prelude::{AvailableSpace, Position, TaffyTree, auto, length};
use taffy::style::Style;

/// Distances from the container edges plus optional fixed extents; an
/// unset edge lets the extent (or the opposite edge) decide.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchors {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Anchors {
    /// Full width, pinned to the bottom edge, fixed height.
    pub fn bottom_strip(height: f32) -> Self {
        Self {
            left: Some(0.0),
            right: Some(0.0),
            bottom: Some(0.0),
            height: Some(height),
            ..Self::default()
        }
    }
}

fn layout_err(err: impl std::fmt::Display) -> Error {
    Error::Layout(err.to_string())
}

/// Frame of a child anchored inside a container of `container` size.
pub fn resolve(container: Size, anchors: Anchors) -> Result<Rect, Error> {
    let mut taffy: TaffyTree<()> = TaffyTree::new();

    let child_style = Style {
        position: Position::Absolute,
        inset: taffy::geometry::Rect {
            left: anchors.left.map(|v| length(v)).unwrap_or_else(auto),
            right: anchors.right.map(|v| length(v)).unwrap_or_else(auto),
            top: anchors.top.map(|v| length(v)).unwrap_or_else(auto),
            bottom: anchors.bottom.map(|v| length(v)).unwrap_or_else(auto),
        },
        size: taffy::geometry::Size {
            width: anchors.width.map(|v| length(v)).unwrap_or_else(auto),
            height: anchors.height.map(|v| length(v)).unwrap_or_else(auto),
        },
        ..Default::default()
    };
    let child = taffy.new_leaf(child_style).map_err(layout_err)?;

    let root_style = Style {
        size: taffy::geometry::Size {
            width: length(container.width),
            height: length(container.height),
        },
        ..Default::default()
    };
    let root = taffy
        .new_with_children(root_style, &[child])
        .map_err(layout_err)?;

    let available = taffy::geometry::Size {
        width: AvailableSpace::Definite(container.width),
        height: AvailableSpace::Definite(container.height),
    };
    taffy.compute_layout(root, available).map_err(layout_err)?;

    let l = taffy.layout(child).map_err(layout_err)?;
    Ok(Rect {
        x: l.location.x,
        y: l.location.y,
        w: l.size.width,
        h: l.size.height,
    })
}
