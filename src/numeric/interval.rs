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

//! Midpoint-radius interval scalar used as the fast filter in the
//! geometric predicates. Rounding error is tracked with compensated
//! sums/products, so a certain sign is a proven sign.

#[derive(Copy, Clone, Debug)]
pub struct Interval {
    pub m: f64,
    pub r: f64,
} // value ∈ [m - r, m + r]

#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    // uses FMA when available (compile with -C target-cpu=native)
    let err = f64::mul_add(a, b, -p);
    (p, err)
}

// The radius terms themselves are computed in round-to-nearest and can
// land a few ulps short; scale outward so the enclosure stays valid.
#[inline]
fn inflate(r: f64) -> f64 {
    r * (1.0 + 16.0 * f64::EPSILON)
}

impl Interval {
    #[inline]
    pub fn from_f64(x: f64) -> Self {
        Interval { m: x, r: 0.0 }
    }

    #[inline]
    pub fn unknown() -> Self {
        Interval {
            m: 0.0,
            r: f64::INFINITY,
        }
    }

    #[inline]
    pub fn lo(self) -> f64 {
        self.m - self.r
    }

    #[inline]
    pub fn hi(self) -> f64 {
        self.m + self.r
    }

    #[inline]
    pub fn add(self, o: Self) -> Self {
        let (s, e) = two_sum(self.m, o.m);
        Interval {
            m: s,
            r: inflate(self.r + o.r + e.abs()),
        }
    }

    #[inline]
    pub fn sub(self, o: Self) -> Self {
        self.add(Interval { m: -o.m, r: o.r })
    }

    #[inline]
    pub fn neg(self) -> Self {
        Interval {
            m: -self.m,
            r: self.r,
        }
    }

    #[inline]
    pub fn mul(self, o: Self) -> Self {
        let (p, e) = two_prod(self.m, o.m);
        Interval {
            m: p,
            r: inflate(self.m.abs() * o.r + o.m.abs() * self.r + self.r * o.r + e.abs()),
        }
    }

    /// Sign of the enclosed value, or `None` when the interval straddles
    /// zero (or is unbounded) and the sign cannot be certified.
    #[inline]
    pub fn sign_if_certain(self) -> Option<i8> {
        if self.r.is_infinite() {
            return None;
        }
        if self.m > self.r {
            Some(1)
        } else if self.m < -self.r {
            Some(-1)
        } else {
            None
        }
    }
}
