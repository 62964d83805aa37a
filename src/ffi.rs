//! C ABI surface over [`crate::cardinality::HyperLogLog`]
//!
//! A thin marshalling layer: every function here does pointer/error-code
//! bookkeeping only, never estimator logic. The opaque [`HllHandle`] hides
//! the Rust type behind a raw pointer so the sketch can be driven from C
//! (or any other FFI-capable caller) without exposing its layout.
//!
//! Error reporting uses small integer codes instead of panics or Rust
//! `Result` values, since neither crosses an FFI boundary safely.

use crate::cardinality::HyperLogLog;
use crate::common::Mergeable;
use std::os::raw::c_int;

/// Success.
pub const HLL_OK: c_int = 0;
/// A pointer argument that should not have been null was null.
pub const HLL_ERR_NULL_POINTER: c_int = -1;
/// `precision` was outside `[4, 18]`.
pub const HLL_ERR_INVALID_PRECISION: c_int = -2;
/// `hll_merge` was called on two handles with different precisions.
pub const HLL_ERR_PRECISION_MISMATCH: c_int = -3;

/// Opaque handle to a heap-allocated sketch.
///
/// Created by [`hll_create`], consumed by every other `hll_*` function,
/// and freed exactly once by [`hll_destroy`]. Callers must not
/// dereference the pointer directly; the type has no public fields.
pub struct HllHandle(HyperLogLog);

/// Allocate a new sketch with the given precision and write its handle
/// to `*out_handle`.
///
/// # Errors
///
/// Returns [`HLL_ERR_NULL_POINTER`] if `out_handle` is null, or
/// [`HLL_ERR_INVALID_PRECISION`] if `precision` is outside `[4, 18]`.
/// On any error, `*out_handle` is left untouched.
///
/// # Safety
///
/// `out_handle` must be a valid, aligned, writable pointer to a
/// `*mut HllHandle`.
#[no_mangle]
pub unsafe extern "C" fn hll_create(precision: c_int, out_handle: *mut *mut HllHandle) -> c_int {
    if out_handle.is_null() {
        return HLL_ERR_NULL_POINTER;
    }
    let sketch = match HyperLogLog::try_new(precision) {
        Ok(s) => s,
        Err(_) => return HLL_ERR_INVALID_PRECISION,
    };
    let handle = Box::new(HllHandle(sketch));
    *out_handle = Box::into_raw(handle);
    HLL_OK
}

/// Fold an already-hashed 64-bit value into the sketch.
///
/// A null `handle` is a silent no-op; there is no failure mode to
/// report back for a single register update.
///
/// # Safety
///
/// `handle`, if non-null, must point to a live value produced by
/// [`hll_create`] and not yet passed to [`hll_destroy`].
#[no_mangle]
pub unsafe extern "C" fn hll_update(handle: *mut HllHandle, hash: u64) {
    if let Some(handle) = handle.as_mut() {
        handle.0.update_hash(hash);
    }
}

/// Write the sketch's cardinality estimate to `*out`.
///
/// # Errors
///
/// Returns [`HLL_ERR_NULL_POINTER`] if either `handle` or `out` is null.
///
/// # Safety
///
/// `handle` must point to a live value produced by [`hll_create`]; `out`
/// must be a valid, aligned, writable pointer to a `u64`.
#[no_mangle]
pub unsafe extern "C" fn hll_estimate(handle: *const HllHandle, out: *mut u64) -> c_int {
    let (Some(handle), false) = (handle.as_ref(), out.is_null()) else {
        return HLL_ERR_NULL_POINTER;
    };
    *out = handle.0.estimate();
    HLL_OK
}

/// Merge `src` into `dst` by per-register maximum.
///
/// # Errors
///
/// Returns [`HLL_ERR_NULL_POINTER`] if either handle is null, or
/// [`HLL_ERR_PRECISION_MISMATCH`] if `dst` and `src` were created with
/// different precisions.
///
/// # Safety
///
/// Both pointers must point to live values produced by [`hll_create`].
#[no_mangle]
pub unsafe extern "C" fn hll_merge(dst: *mut HllHandle, src: *const HllHandle) -> c_int {
    let (Some(dst), Some(src)) = (dst.as_mut(), src.as_ref()) else {
        return HLL_ERR_NULL_POINTER;
    };
    match dst.0.merge(&src.0) {
        Ok(()) => HLL_OK,
        Err(_) => HLL_ERR_PRECISION_MISMATCH,
    }
}

/// Return the precision the handle was created with, or
/// [`HLL_ERR_NULL_POINTER`] (as a negative `c_int`) if `handle` is null.
///
/// # Safety
///
/// `handle` must point to a live value produced by [`hll_create`].
#[no_mangle]
pub unsafe extern "C" fn hll_precision(handle: *const HllHandle) -> c_int {
    match handle.as_ref() {
        Some(handle) => handle.0.precision() as c_int,
        None => HLL_ERR_NULL_POINTER,
    }
}

/// Free a handle created by [`hll_create`].
///
/// A null `handle` is a no-op, matching `free`'s convention.
///
/// # Safety
///
/// `handle` must either be null or a value produced by [`hll_create`]
/// that has not already been passed to `hll_destroy`.
#[no_mangle]
pub unsafe extern "C" fn hll_destroy(handle: *mut HllHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn create_update_estimate_destroy_round_trip() {
        unsafe {
            let mut handle: *mut HllHandle = ptr::null_mut();
            assert_eq!(hll_create(12, &mut handle), HLL_OK);
            assert!(!handle.is_null());

            for i in 0..1000u64 {
                hll_update(handle, i.wrapping_mul(0x9E3779B97F4A7C15));
            }

            let mut estimate: u64 = 0;
            assert_eq!(hll_estimate(handle, &mut estimate), HLL_OK);
            assert!((estimate as i64 - 1000).abs() < 200);

            assert_eq!(hll_precision(handle), 12);
            hll_destroy(handle);
        }
    }

    #[test]
    fn null_pointers_return_error_codes() {
        unsafe {
            assert_eq!(hll_create(10, ptr::null_mut()), HLL_ERR_NULL_POINTER);

            let mut estimate: u64 = 0;
            assert_eq!(
                hll_estimate(ptr::null(), &mut estimate),
                HLL_ERR_NULL_POINTER
            );
            assert_eq!(hll_precision(ptr::null()), HLL_ERR_NULL_POINTER);

            // Not a failure mode; must not crash.
            hll_update(ptr::null_mut(), 42);
            hll_destroy(ptr::null_mut());
        }
    }

    #[test]
    fn invalid_precision_is_rejected() {
        unsafe {
            let mut handle: *mut HllHandle = ptr::null_mut();
            assert_eq!(hll_create(3, &mut handle), HLL_ERR_INVALID_PRECISION);
            assert!(handle.is_null());
        }
    }

    #[test]
    fn merge_precision_mismatch_is_reported() {
        unsafe {
            let mut a: *mut HllHandle = ptr::null_mut();
            let mut b: *mut HllHandle = ptr::null_mut();
            hll_create(10, &mut a);
            hll_create(12, &mut b);

            assert_eq!(hll_merge(a, b), HLL_ERR_PRECISION_MISMATCH);

            hll_destroy(a);
            hll_destroy(b);
        }
    }
}
