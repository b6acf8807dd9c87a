//! Public student code allocation
//!
//! Codes are drawn uniformly from a bounded numeric range and rejected when
//! they were already issued in the current run. Not suitable where codes must
//! be unguessable.

use log::debug;
use rand::Rng;
use std::collections::HashSet;

use crate::constants::{STUDENT_CODE_MAX, STUDENT_CODE_MIN};

pub struct CodeAllocator<R> {
    rng: R,
    min: u32,
    max: u32,
    issued: HashSet<u32>,
}

impl<R: Rng> CodeAllocator<R> {
    /// 8-digit allocator over [STUDENT_CODE_MIN, STUDENT_CODE_MAX]
    pub fn with_rng(rng: R) -> Self {
        Self::with_bounds(rng, STUDENT_CODE_MIN, STUDENT_CODE_MAX)
    }

    /// Allocator over an arbitrary inclusive range. Panics if `min > max`.
    pub fn with_bounds(rng: R, min: u32, max: u32) -> Self {
        assert!(min <= max, "empty code range {}..={}", min, max);
        Self {
            rng,
            min,
            max,
            issued: HashSet::new(),
        }
    }

    /// Issue a code not handed out before by this allocator.
    /// Returns None once every value in the range has been issued.
    pub fn allocate(&mut self) -> Option<String> {
        if self.issued.len() as u64 >= self.capacity() {
            return None;
        }
        loop {
            let candidate = self.rng.gen_range(self.min..=self.max);
            if self.issued.insert(candidate) {
                return Some(candidate.to_string());
            }
            debug!("Student code {} already issued, drawing again", candidate);
        }
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    fn capacity(&self) -> u64 {
        u64::from(self.max - self.min) + 1
    }
}
