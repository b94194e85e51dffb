// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

use kurbo::{Point, Vec2};

use crate::gobject::{GObject, ObjectInfo, ObjectKind};

/// A named point of a pattern, such as the center of an arc.
#[derive(Clone, Debug, PartialEq)]
pub struct LabeledPoint {
    info: ObjectInfo,
    pub x: f64,
    pub y: f64,
    /// Offset of the label from the point.
    pub label_offset: Vec2,
}

impl LabeledPoint {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        LabeledPoint {
            info: ObjectInfo::new(ObjectKind::Point, name),
            x,
            y,
            label_offset: Vec2::ZERO,
        }
    }

    pub fn with_label_offset(mut self, offset: Vec2) -> Self {
        self.label_offset = offset;
        self
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Where the label is drawn.
    pub fn label_pos(&self) -> Point {
        self.to_point() + self.label_offset
    }
}

impl GObject for LabeledPoint {
    fn info(&self) -> &ObjectInfo {
        &self.info
    }

    fn length(&self) -> f64 {
        0.0
    }
}
