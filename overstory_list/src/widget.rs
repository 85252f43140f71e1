// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use kurbo::Point;
use understory_dirty::DirtyIndices;
use understory_event_state::click::{ClickResult, ClickState, MouseButton};
use understory_event_state::hover::HoverState;
use understory_imaging::{ImagingBackend, RectI, ResourceBackend};
use understory_vis_buffer::VisBufferPool;
use understory_virtual_list::{FixedRows, VirtualList};

use crate::{
    EventOutcome, ItemState, ListAction, ListCommand, ListConfig, ListEvent, ListItem, ScrollBar,
    WheelDelta,
};

/// A scrollable list of uniform-height items.
///
/// The list owns its items, scroll position, hover and click state, and a
/// pool of off-screen buffers caching rendered rows. The host supplies
/// bounds and events, calls [`ListWidget::draw`] when
/// [`ListWidget::take_refresh`] reports pending changes, and finally gives
/// the buffers back with [`ListWidget::teardown`].
pub struct ListWidget {
    items: Vec<Rc<dyn ListItem>>,
    list: VirtualList,
    bounds: RectI,
    hover: HoverState<usize>,
    click: ClickState,
    dirty: DirtyIndices,
    pool: VisBufferPool,
    scrollbar: ScrollBar,
    config: ListConfig,
    needs_refresh: bool,
}

impl fmt::Debug for ListWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListWidget")
            .field("len", &self.items.len())
            .field("list", &self.list)
            .field("bounds", &self.bounds)
            .field("hover", &self.hover.current())
            .field("dirty", &self.dirty)
            .field("pool", &self.pool)
            .field("scrollbar", &self.scrollbar)
            .finish_non_exhaustive()
    }
}

impl ListWidget {
    /// Creates an empty list with rows of `item_height` pixels and no bounds.
    #[must_use]
    pub fn new(item_height: i32) -> Self {
        Self {
            items: Vec::new(),
            list: VirtualList::new(FixedRows::new(0, item_height), 0),
            bounds: RectI::ZERO,
            hover: HoverState::new(),
            click: ClickState::new(MouseButton::Primary),
            dirty: DirtyIndices::new(),
            pool: VisBufferPool::new(),
            scrollbar: ScrollBar::default(),
            config: ListConfig::default(),
            needs_refresh: true,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ListConfig) -> Self {
        self.set_config(config);
        self
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Replaces the configuration and repaints everything.
    pub fn set_config(&mut self, config: ListConfig) {
        self.config = config;
        self.invalidate();
    }

    // --- items ---

    /// Appends an item.
    pub fn push_item(&mut self, item: Rc<dyn ListItem>) {
        let index = self.items.len();
        self.items.push(item);
        self.list.set_len(self.items.len());
        self.dirty.mark(index);
        self.update_scrollbar();
        self.needs_refresh = true;
    }

    /// Removes every item and repaints everything.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.list.set_len(0);
        self.hover.clear();
        self.update_scrollbar();
        self.invalidate();
    }

    /// The item at `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Rc<dyn ListItem>> {
        self.items.get(index)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the hovered item.
    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.hover.current()
    }

    /// The hovered item.
    #[must_use]
    pub fn hover_item(&self) -> Option<&Rc<dyn ListItem>> {
        self.items.get(self.hover.current()?)
    }

    // --- geometry and scrolling ---

    /// Screen rectangle the list occupies.
    #[must_use]
    pub fn bounds(&self) -> RectI {
        self.bounds
    }

    /// Moves or resizes the list.
    pub fn set_bounds(&mut self, bounds: RectI) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.list.set_viewport_height(bounds.height());
        self.update_scrollbar();
        self.needs_refresh = true;
    }

    /// Height of every row.
    #[must_use]
    pub fn item_height(&self) -> i32 {
        self.list.rows().item_height()
    }

    /// Changes the row height and repaints everything.
    pub fn set_item_height(&mut self, item_height: i32) {
        self.list.set_item_height(item_height);
        self.update_scrollbar();
        self.invalidate();
    }

    /// Scroll offset in content pixels.
    #[must_use]
    pub fn scroll_position(&self) -> i32 {
        self.list.scroll_offset()
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> i32 {
        self.list.max_scroll()
    }

    /// Jumps to an absolute scroll offset, clamped into `[0, max_scroll()]`.
    ///
    /// Hover is cleared since a different row is now under the pointer.
    pub fn set_scroll_position(&mut self, pos: i32) {
        self.list.set_scroll_offset(pos);
        self.clear_hover_after_scroll();
        self.update_scrollbar();
        self.needs_refresh = true;
    }

    /// Scrolls by `delta` pixels, clamped into `[0, max_scroll()]`.
    ///
    /// Returns `true` if the position changed, in which case the previously
    /// hovered row is repainted and hover cleared.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        if !self.list.scroll_by(delta) {
            return false;
        }
        self.clear_hover_after_scroll();
        self.update_scrollbar();
        self.needs_refresh = true;
        true
    }

    /// Scrolls just enough to show row `index` completely.
    ///
    /// Returns `true` if the position changed.
    pub fn scroll_to_item(&mut self, index: usize) -> bool {
        let delta = self.list.scroll_into_view_delta(index);
        delta != 0 && self.scroll_by(delta)
    }

    /// Recomputes the scrollbar from the current content and viewport.
    ///
    /// Showing or hiding the bar changes the width available to rows, so
    /// that repaints everything.
    pub fn update_scrollbar(&mut self) {
        let geometry = self.list.scrollbar_geometry(self.list.viewport_height());
        if self.scrollbar.set_geometry(geometry) {
            log::debug!(
                "scrollbar {}",
                if self.scrollbar.is_visible() { "shown" } else { "hidden" }
            );
            self.invalidate();
        }
    }

    /// The scrollbar model.
    #[must_use]
    pub fn scrollbar(&self) -> &ScrollBar {
        &self.scrollbar
    }

    /// Rows intersecting the viewport.
    #[must_use]
    pub fn visible_rows(&self) -> Range<usize> {
        self.list.visible_rows()
    }

    /// Number of rows that fit entirely in the viewport.
    #[must_use]
    pub fn visible_row_count(&self) -> usize {
        self.list.visible_row_count()
    }

    /// Row under the screen-space point, if any.
    #[must_use]
    pub fn item_index_at(&self, pos: Point) -> Option<usize> {
        let (x, y) = (to_px(pos.x.floor()), to_px(pos.y.floor()));
        if !self.bounds.contains(x, y) {
            return None;
        }
        self.list.index_at_viewport_y(y - self.bounds.y0)
    }

    // --- invalidation ---

    /// Marks every row stale and forgets all cached pixels.
    pub fn invalidate(&mut self) {
        log::debug!("invalidating all {} list rows", self.items.len());
        self.dirty.clear();
        self.pool.invalidate_all();
        self.needs_refresh = true;
    }

    /// Marks one row stale. Out-of-range indices are ignored.
    pub fn invalidate_item(&mut self, index: usize) {
        if index < self.items.len() {
            self.dirty.mark(index);
            self.needs_refresh = true;
        }
    }

    /// Rows marked stale since the last draw.
    #[must_use]
    pub fn invalidated_items(&self) -> &DirtyIndices {
        &self.dirty
    }

    /// Returns `true` while the primary button is held down with the pointer
    /// inside the list.
    #[must_use]
    pub fn is_mouse_down(&self) -> bool {
        self.click.is_active() && self.bounds.contains_point(self.click.pos())
    }

    /// Returns whether a redraw was requested since the last call, and resets the request.
    pub fn take_refresh(&mut self) -> bool {
        core::mem::take(&mut self.needs_refresh)
    }

    /// The buffer pool, for inspection.
    #[must_use]
    pub fn buffers(&self) -> &VisBufferPool {
        &self.pool
    }

    // --- events ---

    /// Processes one input event.
    pub fn handle_event(&mut self, event: ListEvent) -> EventOutcome {
        match event {
            ListEvent::Command(ListCommand::ThemeChanged) => {
                self.invalidate();
                EventOutcome::handled(false)
            }
            ListEvent::Command(ListCommand::ScrollMoved(pos)) => {
                self.set_scroll_position(pos);
                EventOutcome::handled(true)
            }
            ListEvent::PointerMove { pos } => {
                self.click.on_move(pos);
                let hover = self.hover_target(pos);
                self.set_hover(hover);
                EventOutcome::handled(false)
            }
            ListEvent::Wheel { pos, delta } => {
                if !self.bounds.contains_point(pos) {
                    return EventOutcome::handled(false);
                }
                let pixels = match delta {
                    WheelDelta::Lines(lines) => {
                        -lines
                            * f64::from(self.config.wheel.rows_per_notch)
                            * f64::from(self.item_height())
                    }
                    WheelDelta::Pixels(pixels) => -pixels * self.config.wheel.pixel_ratio,
                };
                self.scroll_by(to_px(pixels.round()));
                EventOutcome::handled(true)
            }
            ListEvent::PointerDown {
                button,
                pos,
                time_ms,
            } => {
                if !self.bounds.contains_point(pos) {
                    return EventOutcome::handled(false);
                }
                match self.click.on_down(button, pos, time_ms) {
                    ClickResult::Started => {
                        self.redraw_hover();
                        EventOutcome::handled(true)
                    }
                    _ => EventOutcome::handled(false),
                }
            }
            ListEvent::PointerUp {
                button,
                pos,
                time_ms,
            } => match self.click.on_up(button, pos, time_ms) {
                ClickResult::Finished | ClickResult::Double => {
                    self.redraw_hover();
                    let action = self
                        .clicked_item()
                        .map(|(index, item)| ListAction::ItemClicked { index, item });
                    EventOutcome {
                        handled: true,
                        action,
                    }
                }
                _ => EventOutcome::handled(false),
            },
            ListEvent::PointerCancel => {
                if self.click.abort() == ClickResult::Aborted {
                    self.redraw_hover();
                }
                self.set_hover(None);
                EventOutcome::handled(false)
            }
        }
    }

    // --- drawing ---

    /// Draws the list: background, stale rows into the buffers, the buffers
    /// onto the screen, then the scrollbar.
    ///
    /// Buffers are (re)allocated on `backend` as the bounds require. The
    /// same backend must be passed to [`ListWidget::teardown`].
    pub fn draw(&mut self, backend: &mut dyn ImagingBackend) {
        let bounds = self.bounds;
        if bounds.is_empty() {
            return;
        }
        let background = self.config.background;
        backend.fill_rect(bounds, background);
        self.pool.ensure(backend, bounds.width(), bounds.height());

        let row_width = bounds.width() - self.scrollbar.reserved_width(&self.config.scrollbar);
        let hover = self.hover.current();
        let pressed = self.is_mouse_down();
        let items = &self.items;
        let stats = self.pool.update(
            backend,
            self.list.visible_span(),
            self.list.rows(),
            &self.dirty,
            background,
            row_width,
            |b, index, rect| {
                if let Some(item) = items.get(index) {
                    let is_hover = hover == Some(index);
                    let state = ItemState {
                        index,
                        is_hover,
                        is_pressed: is_hover && pressed,
                    };
                    item.draw(b, rect, &state);
                }
            },
        );
        log::trace!("list pass at {}: {stats:?}", self.list.scroll_offset());
        self.dirty.clear();

        self.pool.compose(backend, self.list.scroll_offset(), bounds);
        self.scrollbar.draw(backend, bounds, &self.config.scrollbar);
    }

    /// Releases the buffers' render targets.
    ///
    /// The list stays usable; the next draw allocates fresh buffers.
    pub fn teardown<B: ResourceBackend + ?Sized>(&mut self, backend: &mut B) {
        self.pool.release(backend);
    }

    // --- internals ---

    fn hover_target(&self, pos: Point) -> Option<usize> {
        let (x, y) = (to_px(pos.x.floor()), to_px(pos.y.floor()));
        if self
            .scrollbar
            .contains(self.bounds, &self.config.scrollbar, x, y)
        {
            return None;
        }
        let index = self.item_index_at(pos)?;
        (!self.items.get(index)?.is_separator()).then_some(index)
    }

    fn set_hover(&mut self, hover: Option<usize>) {
        let transition = self.hover.update(hover);
        if transition.is_change() {
            for index in transition.affected() {
                self.dirty.mark(index);
            }
            self.needs_refresh = true;
        }
    }

    fn clear_hover_after_scroll(&mut self) {
        if let Some(old) = self.hover.clear() {
            self.dirty.mark(old);
        }
    }

    fn redraw_hover(&mut self) {
        if let Some(index) = self.hover.current() {
            self.invalidate_item(index);
        }
    }

    fn clicked_item(&self) -> Option<(usize, Rc<dyn ListItem>)> {
        if !self.bounds.contains_point(self.click.pos()) {
            return None;
        }
        let index = self.hover.current()?;
        Some((index, Rc::clone(self.items.get(index)?)))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int `as` saturates, which is what pixel conversion wants"
)]
fn to_px(v: f64) -> i32 {
    v as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Row {
        separator: bool,
        draws: Cell<usize>,
    }

    impl ListItem for Row {
        fn draw(&self, _: &mut dyn ImagingBackend, _: RectI, _: &ItemState) {
            self.draws.set(self.draws.get() + 1);
        }

        fn is_separator(&self) -> bool {
            self.separator
        }
    }

    fn list(n: usize) -> ListWidget {
        let mut list = ListWidget::new(20);
        for _ in 0..n {
            list.push_item(Rc::new(Row::default()));
        }
        list.set_bounds(RectI::from_origin_size(0, 0, 200, 100));
        list
    }

    fn at(x: f64, y: f64) -> ListEvent {
        ListEvent::PointerMove {
            pos: Point::new(x, y),
        }
    }

    #[test]
    fn hover_marks_left_and_entered_rows() {
        let mut l = list(50);
        l.invalidate();
        l.handle_event(at(10.0, 25.0));
        assert_eq!(l.hover_index(), Some(1));
        l.handle_event(at(10.0, 45.0));
        assert_eq!(l.hover_index(), Some(2));
        let mut dirty: Vec<_> = l.invalidated_items().iter().collect();
        dirty.sort_unstable();
        assert_eq!(dirty, [1, 2]);
    }

    #[test]
    fn hover_ignores_scrollbar_and_separators() {
        let mut l = ListWidget::new(20);
        l.push_item(Rc::new(Row::default()));
        l.push_item(Rc::new(Row {
            separator: true,
            ..Row::default()
        }));
        for _ in 0..20 {
            l.push_item(Rc::new(Row::default()));
        }
        l.set_bounds(RectI::from_origin_size(0, 0, 200, 100));
        assert!(l.scrollbar().is_visible());

        l.handle_event(at(10.0, 25.0));
        assert_eq!(l.hover_index(), None);
        l.handle_event(at(195.0, 5.0));
        assert_eq!(l.hover_index(), None);
        l.handle_event(at(180.0, 5.0));
        assert_eq!(l.hover_index(), Some(0));
        // Outside the list.
        l.handle_event(at(250.0, 5.0));
        assert_eq!(l.hover_index(), None);
    }

    #[test]
    fn scroll_by_invalidates_only_the_old_hover_row() {
        let mut l = list(50);
        l.handle_event(at(10.0, 65.0));
        assert_eq!(l.hover_index(), Some(3));
        l.invalidate();
        assert!(l.invalidated_items().is_empty());

        assert!(l.scroll_by(40));
        assert_eq!(l.hover_index(), None);
        assert_eq!(l.invalidated_items().len(), 1);
        assert!(l.invalidated_items().contains(3));

        // No movement, no invalidation.
        l.invalidate();
        assert!(!l.scroll_by(0));
        assert!(l.invalidated_items().is_empty());
    }

    #[test]
    fn short_lists_hide_the_scrollbar() {
        let mut l = list(3);
        assert!(!l.scrollbar().is_visible());
        for _ in 0..10 {
            l.push_item(Rc::new(Row::default()));
        }
        assert!(l.scrollbar().is_visible());
        l.clear_items();
        assert!(!l.scrollbar().is_visible());
        assert!(l.is_empty());
    }

    #[test]
    fn wheel_scrolls_three_rows_per_notch() {
        let mut l = list(50);
        let down = ListEvent::Wheel {
            pos: Point::new(10.0, 10.0),
            delta: WheelDelta::Lines(-1.0),
        };
        assert!(l.handle_event(down).handled);
        assert_eq!(l.scroll_position(), 60);

        let outside = ListEvent::Wheel {
            pos: Point::new(500.0, 10.0),
            delta: WheelDelta::Lines(-1.0),
        };
        assert!(!l.handle_event(outside).handled);
        assert_eq!(l.scroll_position(), 60);

        l.handle_event(ListEvent::Wheel {
            pos: Point::new(10.0, 10.0),
            delta: WheelDelta::Pixels(25.0),
        });
        assert_eq!(l.scroll_position(), 35);
    }

    #[test]
    fn scroll_moved_command_sets_position() {
        let mut l = list(50);
        let out = l.handle_event(ListEvent::Command(ListCommand::ScrollMoved(300)));
        assert!(out.handled);
        assert_eq!(l.scroll_position(), 300);
        l.handle_event(ListEvent::Command(ListCommand::ScrollMoved(-5)));
        assert_eq!(l.scroll_position(), 0);
        l.handle_event(ListEvent::Command(ListCommand::ScrollMoved(i32::MAX)));
        assert_eq!(l.scroll_position(), l.max_scroll());
    }

    #[test]
    fn take_refresh_resets() {
        let mut l = list(5);
        assert!(l.take_refresh());
        assert!(!l.take_refresh());
        l.invalidate_item(2);
        assert!(l.take_refresh());
        l.invalidate_item(99);
        assert!(!l.take_refresh());
    }

    #[test]
    fn item_index_at_respects_bounds() {
        let mut l = list(3);
        l.set_bounds(RectI::from_origin_size(10, 10, 100, 100));
        assert_eq!(l.item_index_at(Point::new(20.0, 10.0)), Some(0));
        assert_eq!(l.item_index_at(Point::new(20.0, 69.9)), Some(2));
        assert_eq!(l.item_index_at(Point::new(20.0, 70.0)), None);
        assert_eq!(l.item_index_at(Point::new(5.0, 20.0)), None);
    }
}
