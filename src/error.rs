// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0

/// Errors raised by arc construction and segmentation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ArcError {
    #[error("angle of arc cannot be 0 degrees")]
    ZeroAngle,

    #[error("arc does not have this many parts: requested {index}, arc has {count}")]
    NoSuchSegment { index: usize, count: usize },

    #[error("arc radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("arc angle must be finite, got {0}")]
    InvalidAngle(f64),
}

pub type ArcResult<T> = Result<T, ArcError>;
