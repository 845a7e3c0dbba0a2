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

//! Exact rational scalar backing the slow path of the filtered predicates.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use rug::Rational;

#[derive(Clone, Debug)]
pub struct Exact(pub Rational);

impl Exact {
    /// Exact conversion; every finite double is a dyadic rational.
    /// Non-finite inputs collapse to zero (callers only pass finite
    /// coordinates).
    pub fn from_f64(v: f64) -> Self {
        match Rational::from_f64(v) {
            Some(r) => Exact(r),
            None => Exact(Rational::new()),
        }
    }

    pub fn zero() -> Self {
        Exact(Rational::new())
    }

    pub fn cmp0(&self) -> Ordering {
        self.0.cmp0()
    }
}

impl<'a, 'b> Add<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn add(self, rhs: &'b Exact) -> Exact {
        // in-place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        Exact(result)
    }
}

impl<'a, 'b> Sub<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn sub(self, rhs: &'b Exact) -> Exact {
        // in-place API on rug::Rational: result = self - rhs
        let mut result = self.0.clone();
        result -= &rhs.0;
        Exact(result)
    }
}

impl<'a, 'b> Mul<&'b Exact> for &'a Exact {
    type Output = Exact;

    fn mul(self, rhs: &'b Exact) -> Exact {
        // in-place API on rug::Rational: result = self * rhs
        let mut result = self.0.clone();
        result *= &rhs.0;
        Exact(result)
    }
}

impl<'a> Neg for &'a Exact {
    type Output = Exact;

    fn neg(self) -> Exact {
        let mut result = self.0.clone();
        result *= -1;
        Exact(result)
    }
}

impl PartialEq for Exact {
    fn eq(&self, other: &Exact) -> bool {
        self.0 == other.0
    }
}

impl Eq for Exact {}

impl PartialOrd for Exact {
    fn partial_cmp(&self, other: &Exact) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Exact {
    fn cmp(&self, other: &Exact) -> Ordering {
        self.0.cmp(&other.0)
    }
}
