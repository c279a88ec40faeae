// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::list::key::{ListId, NodeKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForeignNodeError {
    node: NodeKey,
    list: ListId,
}

impl ForeignNodeError {
    #[inline]
    pub fn new(node: NodeKey, list: ListId) -> Self {
        Self { node, list }
    }

    #[inline]
    pub fn node(&self) -> NodeKey {
        self.node
    }

    /// The list the node was presented to.
    #[inline]
    pub fn list(&self) -> ListId {
        self.list
    }
}

impl std::fmt::Display for ForeignNodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} does not belong to {}", self.node, self.list)
    }
}

impl std::error::Error for ForeignNodeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StaleNodeError(NodeKey);

impl StaleNodeError {
    #[inline]
    pub fn new(node: NodeKey) -> Self {
        Self(node)
    }

    #[inline]
    pub fn node(&self) -> NodeKey {
        self.0
    }
}

impl std::fmt::Display for StaleNodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node {} has been removed from its list", self.0)
    }
}

impl std::error::Error for StaleNodeError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InvalidNodeError {
    Foreign(ForeignNodeError),
    Stale(StaleNodeError),
}

impl InvalidNodeError {
    /// The handle that failed to resolve.
    #[inline]
    pub fn node(&self) -> NodeKey {
        match self {
            InvalidNodeError::Foreign(e) => e.node(),
            InvalidNodeError::Stale(e) => e.node(),
        }
    }
}

impl std::fmt::Display for InvalidNodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidNodeError::Foreign(e) => write!(f, "InvalidNodeError: {}", e),
            InvalidNodeError::Stale(e) => write!(f, "InvalidNodeError: {}", e),
        }
    }
}

impl std::error::Error for InvalidNodeError {}

impl From<ForeignNodeError> for InvalidNodeError {
    fn from(e: ForeignNodeError) -> Self {
        InvalidNodeError::Foreign(e)
    }
}

impl From<StaleNodeError> for InvalidNodeError {
    fn from(e: StaleNodeError) -> Self {
        InvalidNodeError::Stale(e)
    }
}
