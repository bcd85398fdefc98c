//! Scratch-buffer discipline for the multiplication/division engines.
//!
//! The Karatsuba recursion and Algorithm D both need short-lived limb
//! buffers whose lifetime never escapes the call that allocated them. Two
//! strategies coexist: a small buffer kept inline on the stack for the
//! common case, and a heap allocation drawn from a thread-local pool once a
//! request exceeds the inline capacity. Buffers are always
//! zero-initialized, since the Karatsuba `z_mid` expansion in `mul.rs`
//! relies on starting from zero.

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};

/// Limbs held inline before spilling to the heap. 64 limbs (256 bytes)
/// comfortably covers the schoolbook Karatsuba base case's own scratch
/// needs.
const INLINE_CAPACITY: usize = 64;

thread_local! {
    static POOL: RefCell<Vec<Vec<u32>>> = const { RefCell::new(Vec::new()) };
}

enum Storage {
    Inline([u32; INLINE_CAPACITY], usize),
    Heap(Vec<u32>),
}

/// A zero-initialized scratch buffer of exactly `len` limbs. Released back
/// to the pool (if heap-backed) on drop, so every return path — including
/// early returns from error conditions — releases its allocation.
pub struct Scratch {
    storage: Storage,
}

impl Scratch {
    /// Allocates a zeroed scratch buffer of `len` limbs.
    pub fn new(len: usize) -> Self {
        if len <= INLINE_CAPACITY {
            Scratch {
                storage: Storage::Inline([0u32; INLINE_CAPACITY], len),
            }
        } else {
            let mut buf = POOL.with(|pool| pool.borrow_mut().pop()).unwrap_or_default();
            buf.clear();
            buf.resize(len, 0);
            Scratch {
                storage: Storage::Heap(buf),
            }
        }
    }

    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Inline(_, len) => *len,
            Storage::Heap(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Deref for Scratch {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        match &self.storage {
            Storage::Inline(arr, len) => &arr[..*len],
            Storage::Heap(v) => v,
        }
    }
}

impl DerefMut for Scratch {
    fn deref_mut(&mut self) -> &mut [u32] {
        match &mut self.storage {
            Storage::Inline(arr, len) => &mut arr[..*len],
            Storage::Heap(v) => v,
        }
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        if let Storage::Heap(v) = &mut self.storage {
            // Cap how many buffers we hoard per thread; the pool exists to
            // amortize allocation, not to grow unbounded.
            const MAX_POOLED: usize = 16;
            let taken = std::mem::take(v);
            POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOLED {
                    pool.push(taken);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_buffer_is_zeroed() {
        let s = Scratch::new(8);
        assert_eq!(s.len(), 8);
        assert!(s.iter().all(|&l| l == 0));
    }

    #[test]
    fn heap_buffer_is_zeroed_even_when_reused() {
        {
            let mut s = Scratch::new(200);
            s[0] = 0xDEAD_BEEF;
            s[199] = 1;
        }
        let s = Scratch::new(200);
        assert!(s.iter().all(|&l| l == 0), "reused heap scratch must be rezeroed");
    }

    #[test]
    fn deref_mut_is_writable() {
        let mut s = Scratch::new(4);
        s[2] = 7;
        assert_eq!(s[2], 7);
    }
}
