//! The widget trait and the decorated base every control is built on.

use roundel_core::animation::AnimationSpec;
use roundel_core::animator::{Animator, Target, Transition};
use roundel_core::{
    Color, ControlEvents, Layer, LayerId, LayerTree, PointerEvent, Rect, Semantics, Size,
};

use crate::decoration::Decoration;

pub trait Widget {
    /// Current visual state.
    fn layers(&self) -> &LayerTree;

    /// Lays the widget out at `size`. Never notifies value observers.
    fn layout(&mut self, size: Size);

    /// Preferred size when the host has no constraint of its own.
    fn intrinsic_size(&self) -> Size {
        Size::ZERO
    }

    fn semantics(&self) -> Semantics;

    /// Feeds a pointer sample in local coordinates; returns the control
    /// events it produced.
    fn handle_pointer(&mut self, event: &PointerEvent) -> ControlEvents {
        let _ = event;
        ControlEvents::empty()
    }

    /// Advances running animations. Call once per frame.
    fn tick(&mut self) {}
}

/// A root layer plus its [`Decoration`], with setters that apply at once.
pub struct Control {
    tree: LayerTree,
    decoration: Decoration,
}

impl Control {
    pub fn new(size: Size, decoration: Decoration) -> Self {
        let mut root = Layer::new(Rect::from_size(size));
        decoration.apply(&mut root);
        Self {
            tree: LayerTree::new(root),
            decoration,
        }
    }

    pub fn tree(&self) -> &LayerTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut LayerTree {
        &mut self.tree
    }

    pub fn root(&self) -> LayerId {
        self.tree.root()
    }

    pub fn size(&self) -> Size {
        self.tree.root_layer().frame.size()
    }

    /// Local bounds: origin at zero.
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }

    pub fn resize(&mut self, size: Size) {
        let root = self.tree.root_layer_mut();
        root.frame.w = size.width;
        root.frame.h = size.height;
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.decoration.border_width = width;
        self.tree.root_layer_mut().border_width = width;
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.decoration.border_color = color;
        self.tree.root_layer_mut().border_color = color;
    }

    pub fn set_corner_radius(&mut self, radius: f32) {
        self.decoration.corner_radius = radius;
        self.tree.root_layer_mut().corner_radius = radius;
    }

    pub fn set_masks_to_bounds(&mut self, masks: bool) {
        self.decoration.masks_to_bounds = masks;
        self.tree.root_layer_mut().masks_to_bounds = masks;
    }

    pub fn set_background(&mut self, color: Color) {
        self.tree.root_layer_mut().background = color;
    }

    /// Commits `color` as the border color and animates the visible border
    /// from whatever it shows now.
    pub fn animate_border_color<C>(
        &mut self,
        animator: &mut Animator<C>,
        color: Color,
        spec: AnimationSpec,
    ) {
        self.decoration.border_color = color;
        let root = self.tree.root();
        animator.submit(
            &self.tree,
            Transition::new(spec).animate(root, Target::BorderColor(color)),
        );
    }
}
