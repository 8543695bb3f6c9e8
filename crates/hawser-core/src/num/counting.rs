// Copyright (c) 2025 the Hawser contributors.
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

use num_traits::{CheckedMul, PrimInt};

/// Computes the binomial coefficient `C(n, k)`, the number of length-`k`
/// selections (without replacement, order-insensitive) from `n` elements.
///
/// Returns `Some(0)` for `k > n` and `None` on overflow. Every intermediate
/// division is exact: the running product of `i` consecutive integers is
/// always divisible by `i!`.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::num::counting::binomial;
///
/// assert_eq!(binomial(5u64, 2), Some(10));
/// assert_eq!(binomial(3u64, 5), Some(0));
/// assert_eq!(binomial(0u64, 0), Some(1));
/// assert_eq!(binomial(u64::MAX, 30), None); // overflow
/// ```
pub fn binomial<T>(n: T, k: T) -> Option<T>
where
    T: PrimInt + CheckedMul,
{
    if k > n {
        return Some(T::zero());
    }
    // Use the smaller of k and n - k to keep the loop short.
    let k = if k > n - k { n - k } else { k };

    let mut acc = T::one();
    let mut i = T::one();
    while i <= k {
        acc = acc.checked_mul(&(n - k + i))?;
        acc = acc / i;
        i = i + T::one();
    }
    Some(acc)
}

/// Computes the number of length-`r` orderings of `n` elements,
/// `n * (n-1) * ... * (n-r+1)`.
///
/// Returns `Some(0)` for `r > n` and `None` on overflow.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::num::counting::permutation_count;
///
/// assert_eq!(permutation_count(4u64, 2), Some(12));
/// assert_eq!(permutation_count(4u64, 0), Some(1));
/// assert_eq!(permutation_count(2u64, 3), Some(0));
/// ```
pub fn permutation_count<T>(n: T, r: T) -> Option<T>
where
    T: PrimInt + CheckedMul,
{
    if r > n {
        return Some(T::zero());
    }
    let mut acc = T::one();
    let mut i = n - r + T::one();
    while i <= n {
        acc = acc.checked_mul(&i)?;
        i = i + T::one();
    }
    Some(acc)
}

/// Computes `n!`.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::num::counting::factorial;
///
/// assert_eq!(factorial(0u64), Some(1));
/// assert_eq!(factorial(5u64), Some(120));
/// assert_eq!(factorial(30u64), None); // overflow in u64
/// ```
#[inline]
pub fn factorial<T>(n: T) -> Option<T>
where
    T: PrimInt + CheckedMul,
{
    permutation_count(n, n)
}

/// Computes the number of length-`r` selections with replacement from `n`
/// elements, `C(n + r - 1, r)`.
///
/// Returns `Some(1)` for `r == 0` (the single empty selection) and `Some(0)`
/// for `r > 0` over an empty pool.
///
/// # Examples
///
/// ```rust
/// # use hawser_core::num::counting::multiset_count;
///
/// assert_eq!(multiset_count(3u64, 2), Some(6));
/// assert_eq!(multiset_count(0u64, 0), Some(1));
/// assert_eq!(multiset_count(0u64, 2), Some(0));
/// ```
pub fn multiset_count<T>(n: T, r: T) -> Option<T>
where
    T: PrimInt + CheckedMul,
{
    if r == T::zero() {
        return Some(T::one());
    }
    if n == T::zero() {
        return Some(T::zero());
    }
    binomial(n + r - T::one(), r)
}
