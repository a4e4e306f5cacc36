// Copyright 2025 the Glyphlab Authors
// SPDX-License-Identifier: Apache-2.0

//! Export of the working path as SVG and PNG

pub mod png;
pub mod svg;
