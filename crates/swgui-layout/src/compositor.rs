//! Layout Compositor.
//!
//! Combines the resolvers into an absolute box per element. Given the
//! parent's reference-space box `P` (the reference frame at the origin for
//! top-level elements):
//!
//! 1. Resolve `(w, h)` with [`pack_size`].
//! 2. Resolve `(baseX, baseY)` with [`pack_location`].
//! 3. `x = P.x + baseX + location.x`, `y = P.y + baseY + location.y`.
//! 4. Add the [`scroll_extent_offset`] correction.
//! 5. Scale `x, y, w, h` by the frame's `scaleX` / `scaleY`.
//!
//! Steps 1-4 produce the element's reference-space [`Rect`], which is what
//! its children are laid out against; step 5 happens once per element and
//! is never fed back into the walk. Every quantity is closed-form in the
//! parent's box, so a single top-down pass resolves the whole tree.

use swgui_dom::{ElementId, ElementTree};

use crate::box_model::{Rect, ResolvedBox};
use crate::frame::ReferenceFrame;
use crate::props::LayoutProps;
use crate::resolve::{pack_location, pack_size, scroll_extent_offset};

/// Resolve an element to its reference-space box (steps 1-4).
///
/// `parent` is the parent's reference-space box; `None` means the element is
/// top-level and is laid out against the reference frame.
#[must_use]
pub fn resolve_reference(
    props: &LayoutProps,
    parent: Option<&Rect>,
    frame: &ReferenceFrame,
) -> Rect {
    let frame_rect = frame.reference_rect();
    let parent = parent.unwrap_or(&frame_rect);

    // STEP 1: PackSize
    let size = pack_size(props, parent, frame);

    // STEP 2: PackLocation
    let base = pack_location(props, size, parent);

    // STEP 3: Local offset
    let mut x = parent.x + base.x + props.location.x;
    let mut y = parent.y + base.y + props.location.y;

    // STEP 4: ScrollExtent centering
    let centering = scroll_extent_offset(props, size);
    x += centering.x;
    y += centering.y;

    Rect::new(x, y, size.width, size.height)
}

/// Scale a reference-space box into output space (step 5).
#[must_use]
pub fn to_output(rect: &Rect, frame: &ReferenceFrame) -> ResolvedBox {
    let (sx, sy) = (frame.scale_x(), frame.scale_y());
    ResolvedBox {
        x: rect.x * sx,
        y: rect.y * sy,
        width: rect.width * sx,
        height: rect.height * sy,
    }
}

/// Resolve an element to its absolute output-space box.
///
/// `parent` is the parent's reference-space box (see [`LayoutTree::reference_rect`]);
/// `None` lays the element out against the reference frame.
#[must_use]
pub fn resolve(props: &LayoutProps, parent: Option<&Rect>, frame: &ReferenceFrame) -> ResolvedBox {
    to_output(&resolve_reference(props, parent, frame), frame)
}

/// Resolve a single element of `tree` by walking its ancestor chain from the
/// top down. O(depth).
///
/// Returns `None` for unknown ids and for the root. A detached subtree is
/// laid out as if its topmost node were top-level.
#[must_use]
pub fn resolve_element(
    tree: &ElementTree,
    id: ElementId,
    frame: &ReferenceFrame,
) -> Option<ResolvedBox> {
    let element = tree.as_element(id)?;

    let mut chain: Vec<ElementId> = tree
        .ancestors(id)
        .take_while(|&ancestor| ancestor != ElementId::ROOT)
        .collect();
    chain.reverse();

    let mut parent_rect = frame.reference_rect();
    for ancestor in chain {
        if let Some(data) = tree.as_element(ancestor) {
            let props = LayoutProps::from_element(data);
            parent_rect = resolve_reference(&props, Some(&parent_rect), frame);
        }
    }

    let props = LayoutProps::from_element(element);
    Some(resolve(&props, Some(&parent_rect), frame))
}

/// Layout result for one node.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LaidOut {
    reference: Rect,
    output: ResolvedBox,
}

/// Resolved boxes for every element attached to a tree.
///
/// Indexed by [`ElementId`]; the root maps to the whole frame.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    entries: Vec<Option<LaidOut>>,
}

impl LayoutTree {
    /// Lay out every element reachable from the root.
    ///
    /// Single top-down pass with an explicit stack: each parent is resolved
    /// before its children and each node exactly once.
    #[must_use]
    pub fn build(tree: &ElementTree, frame: &ReferenceFrame) -> Self {
        let mut entries: Vec<Option<LaidOut>> = vec![None; tree.len()];

        let root_rect = frame.reference_rect();
        entries[ElementId::ROOT.0] = Some(LaidOut {
            reference: root_rect,
            output: to_output(&root_rect, frame),
        });

        let mut stack: Vec<(ElementId, Rect)> = tree
            .children(ElementId::ROOT)
            .iter()
            .rev()
            .map(|&child| (child, root_rect))
            .collect();

        while let Some((id, parent_rect)) = stack.pop() {
            let Some(element) = tree.as_element(id) else {
                continue;
            };
            if entries.get(id.0).is_none_or(Option::is_some) {
                continue;
            }

            let props = LayoutProps::from_element(element);
            let reference = resolve_reference(&props, Some(&parent_rect), frame);
            let output = to_output(&reference, frame);

            #[cfg(feature = "layout-trace")]
            eprintln!(
                "[LAYOUT] {:?} <{}> depth={} ref={:?} out={:?}",
                id,
                element.tag_name,
                tree.depth(id),
                reference,
                output
            );

            entries[id.0] = Some(LaidOut { reference, output });
            stack.extend(
                tree.children(id)
                    .iter()
                    .rev()
                    .map(|&child| (child, reference)),
            );
        }

        Self { entries }
    }

    /// The output-space box of `id`, if it was laid out.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<ResolvedBox> {
        self.entries.get(id.0).copied().flatten().map(|e| e.output)
    }

    /// The reference-space box of `id`, if it was laid out. This is the box
    /// to pass as `parent` when resolving a new child of `id`.
    #[must_use]
    pub fn reference_rect(&self, id: ElementId) -> Option<Rect> {
        self.entries.get(id.0).copied().flatten().map(|e| e.reference)
    }

    /// Number of laid-out nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// True if nothing was laid out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(id, output box)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, ResolvedBox)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.map(|e| (ElementId(i), e.output)))
    }
}
