// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Bento placement: splits an ordered widget list into the slots beside the
//! center table and the row groups above and below it.
//!
//! Placement never looks at what a widget renders. Order is preserved
//! everywhere and every widget lands in exactly one group.

use crate::ids::WidgetId;

pub const SIDE_SLOT_CAPACITY: usize = 2;
pub const MAX_WIDGETS_PER_ROW: usize = 6;
/// Up to this many leftover widgets favor the top group (60/40 split).
pub const TOP_FAVORED_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor<T> {
    pub id: WidgetId,
    pub payload: T,
}

impl<T> WidgetDescriptor<T> {
    pub fn new(id: impl Into<WidgetId>, payload: T) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }
}

/// Whether each side of the center strip is free for widgets. A side that
/// hosts an external panel is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideSlots {
    pub left: bool,
    pub right: bool,
}

impl SideSlots {
    pub const BOTH: Self = Self {
        left: true,
        right: true,
    };
    pub const NONE: Self = Self {
        left: false,
        right: false,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BentoPlacement<T> {
    pub left: Vec<WidgetDescriptor<T>>,
    pub right: Vec<WidgetDescriptor<T>>,
    pub top_rows: Vec<Vec<WidgetDescriptor<T>>>,
    pub bottom_rows: Vec<Vec<WidgetDescriptor<T>>>,
}

impl<T> BentoPlacement<T> {
    pub fn len(&self) -> usize {
        self.left.len()
            + self.right.len()
            + self.top_rows.iter().map(Vec::len).sum::<usize>()
            + self.bottom_rows.iter().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widgets in placement order: left, right, top rows, bottom rows.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetDescriptor<T>> {
        self.left
            .iter()
            .chain(self.right.iter())
            .chain(self.top_rows.iter().flatten())
            .chain(self.bottom_rows.iter().flatten())
    }
}

pub fn place<T>(widgets: Vec<WidgetDescriptor<T>>, slots: SideSlots) -> BentoPlacement<T> {
    let mut remaining = widgets.into_iter();

    let left = take_side(&mut remaining, slots.left);
    let right = take_side(&mut remaining, slots.right);

    let mut top = remaining.collect::<Vec<_>>();
    let top_count = top_share(top.len());
    let bottom = top.split_off(top_count);

    BentoPlacement {
        left,
        right,
        top_rows: into_rows(top),
        bottom_rows: into_rows(bottom),
    }
}

fn take_side<T>(
    remaining: &mut impl Iterator<Item = WidgetDescriptor<T>>,
    available: bool,
) -> Vec<WidgetDescriptor<T>> {
    if !available {
        return Vec::new();
    }
    remaining.by_ref().take(SIDE_SLOT_CAPACITY).collect()
}

/// How many of `count` leftover widgets go above the center strip.
pub fn top_share(count: usize) -> usize {
    match count {
        0 => 0,
        // ceil(count * 0.6) in integers
        n if n <= TOP_FAVORED_LIMIT => (n * 3).div_ceil(5),
        n => n.div_ceil(2),
    }
}

fn into_rows<T>(group: Vec<WidgetDescriptor<T>>) -> Vec<Vec<WidgetDescriptor<T>>> {
    let mut rows = Vec::with_capacity(group.len().div_ceil(MAX_WIDGETS_PER_ROW));
    let mut current = Vec::with_capacity(MAX_WIDGETS_PER_ROW.min(group.len()));
    for widget in group {
        current.push(widget);
        if current.len() == MAX_WIDGETS_PER_ROW {
            rows.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
