// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Protected evaluation scope for the filtered predicates.

use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static PROTECTED_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// RAII guard enabling the interval filter in geometric predicates.
///
/// While at least one `Protector` is alive on the current thread, a
/// predicate first evaluates with midpoint-radius intervals and only falls
/// back to exact rationals when the interval sign is inconclusive. Without
/// an active protector every predicate takes the exact path from the
/// start. Results never depend on the guard, only cost does.
///
/// Guards nest; the scope ends when the last one is dropped. Dropping on
/// every exit path (including `?`-returns) is what makes the scope safe to
/// establish once per top-level query.
pub struct Protector {
    // thread-local counter, so the guard must not cross threads
    _not_send: PhantomData<*const ()>,
}

impl Protector {
    pub fn new() -> Self {
        PROTECTED_DEPTH.with(|d| d.set(d.get() + 1));
        Protector {
            _not_send: PhantomData,
        }
    }
}

impl Default for Protector {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Protector {
    fn drop(&mut self) {
        PROTECTED_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

/// True when a `Protector` scope is active on the current thread.
pub fn is_active() -> bool {
    PROTECTED_DEPTH.with(|d| d.get() > 0)
}
