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

//! Positional algorithms over the arena-backed lists.
//!
//! Everything here is written against [`ListView`](crate::list::ListView)
//! where it only needs to read, and against the concrete singly linked list
//! where it has to rewrite links.

pub mod merge;
pub mod palindrome;
pub mod reverse;
pub mod runner;

pub use merge::{merge_sorted, merge_sorted_owned};
pub use palindrome::{is_palindrome, is_palindrome_buffered, is_palindrome_recursive};
pub use reverse::{add_in_reverse, add_in_reverse_iterative};
pub use runner::{first_half_tail, middle, middle_node};
