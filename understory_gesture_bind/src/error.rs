// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding errors.

use thiserror::Error;

/// Why a binding operation was refused.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum BindError {
    /// The element tree does not know the element.
    #[error("not an element of the tree")]
    NotAnElement,
    /// The element has no gesture binding.
    #[error("element is not bound")]
    NotBound,
}
