// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

//! Identity and classification shared by all geometric objects of a pattern.

/// What kind of geometric object a value is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Point,
    Arc,
}

/// Which drawing stage an object belongs to.
///
/// Calculation objects are the construction geometry of a pattern piece;
/// modeling objects are the ones copied into a finished detail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    #[default]
    Calculation,
    Modeling,
}

/// Fields every geometric object carries.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectInfo {
    pub kind: ObjectKind,
    /// Id assigned by the container holding the object, 0 when unassigned.
    pub id: u32,
    /// Id of the object this one was derived from.
    pub id_object: u32,
    pub mode: DrawMode,
    pub name: String,
}

impl ObjectInfo {
    pub fn new(kind: ObjectKind, name: impl Into<String>) -> Self {
        ObjectInfo {
            kind,
            id: 0,
            id_object: 0,
            mode: DrawMode::default(),
            name: name.into(),
        }
    }
}

pub trait GObject {
    fn info(&self) -> &ObjectInfo;

    /// Length of the object along its outline.
    fn length(&self) -> f64;

    fn kind(&self) -> ObjectKind {
        self.info().kind
    }

    fn id(&self) -> u32 {
        self.info().id
    }

    fn id_object(&self) -> u32 {
        self.info().id_object
    }

    fn mode(&self) -> DrawMode {
        self.info().mode
    }

    fn name(&self) -> &str {
        &self.info().name
    }
}
