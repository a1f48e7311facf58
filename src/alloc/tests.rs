#![cfg(test)]

use std::ptr::NonNull;

use super::*;
use crate::util::alloc::{AlignedBytes, ZeroSizedType};
use crate::util::panic::assert_panics;

#[repr(align(64))]
struct OverAligned(#[allow(dead_code)] u8);

fn fill_sequence(region: Region<usize>) {
    for i in 0..region.len() {
        // SAFETY: i is within the region.
        unsafe { region.as_ptr().add(i).write(i) };
    }
}

fn round_trip<A: Allocator>(alloc: &A) {
    let region = alloc.alloc(100);
    assert_eq!(region.len(), 100, "The region should be exactly the requested length.");
    assert_eq!(region.as_ptr().addr().get() % ALIGN, 0, "The region should be aligned.");
    unsafe { alloc.free(region) };

    assert!(alloc.alloc(0).is_empty(), "A zero length allocation should be empty.");
}

fn realloc_preserves<A: Allocator>(alloc: &A) {
    let region = alloc.alloc_array::<usize>(10);
    fill_sequence(region);

    let grown = unsafe { alloc.realloc_array(region, 1000) };
    assert_eq!(grown.len(), 1000);
    let items = unsafe { grown.with_len(10).as_slice() };
    assert!(items.iter().copied().eq(0..10), "Growing should preserve every item.");

    let shrunk = unsafe { alloc.realloc_array(grown, 4) };
    assert_eq!(unsafe { shrunk.as_slice() }, &[0, 1, 2, 3]);

    let emptied = unsafe { alloc.realloc_array(shrunk, 0) };
    assert!(emptied.is_empty());

    let fresh = unsafe { alloc.realloc_array(emptied, 8) };
    assert_eq!(fresh.len(), 8, "Growing from empty should behave like a fresh allocation.");
    unsafe { alloc.free_array(fresh) };
}

#[test]
fn test_global() {
    round_trip(&Global);
    realloc_preserves(&Global);

    let region = Global.alloc(32);
    assert!(unsafe { Global.resize(region, 32) });
    assert!(!unsafe { Global.resize(region, 16) }, "Global can't resize in place.");
    unsafe { Global.free(region) };
}

#[cfg(all(any(target_os = "linux", target_os = "macos"), feature = "heap"))]
#[test]
fn test_c_heap() {
    round_trip(&CHeap);
    realloc_preserves(&CHeap);

    let region = CHeap.alloc(64);
    assert!(unsafe { CHeap.resize(region, 1) }, "Shrinking should always fit in place.");
    unsafe { CHeap.free(region.with_len(1)) };
}

#[test]
fn test_counting() {
    let alloc = Counting::new(Global);
    round_trip(&alloc);
    realloc_preserves(&alloc);

    let stats = alloc.stats();
    assert_eq!(stats.live_bytes, 0, "Every byte should have been returned.");
    assert_eq!(stats.live_allocs(), 0);
    assert_eq!(stats.peak_bytes, 1000 * size_of::<usize>() + 10 * size_of::<usize>());
    assert_eq!(stats.failed_allocs, 0);
    assert!(stats.resizes > 0);

    assert_panics!({
        let region = alloc.alloc(8);
        unsafe {
            alloc.free(region);
            alloc.free(region);
        }
    });
}

#[test]
fn test_counting_zero_length() {
    let alloc = Counting::new(Global);
    assert!(alloc.alloc(0).is_empty());
    assert_eq!(
        alloc.stats(),
        Stats::default(),
        "A zero length request is neither an allocation nor a failure."
    );

    let mut backing = AlignedBytes::<16>::new();
    let alloc = Counting::new(FixedBuffer::new(&mut backing.0));
    assert!(alloc.alloc(32).is_empty());
    assert_eq!(alloc.stats().failed_allocs, 1, "An unsatisfiable request should still count.");
}

#[test]
fn test_counting_over_free_stops_before_backend() {
    let alloc = Counting::new(Counting::new(Global));
    let region = alloc.alloc(8);

    unsafe { alloc.free(region) };
    assert_panics!({ unsafe { alloc.free(region) } });
    assert_eq!(
        alloc.inner().stats().frees,
        1,
        "The second free shouldn't reach the wrapped allocator."
    );
}

#[test]
fn test_stats_arithmetic() {
    let stats = Stats {
        allocs: 3,
        failed_allocs: 1,
        resizes: 2,
        frees: 2,
        ..Stats::default()
    };
    assert_eq!(stats.calls(), 8);
    assert_eq!(stats.live_allocs(), 1);

    let broken = Stats {
        allocs: 1,
        frees: 2,
        ..Stats::default()
    };
    assert_panics!({ broken.live_allocs() }, "integer overflow in subtraction");
    let saturated = Stats {
        allocs: usize::MAX,
        frees: 1,
        ..Stats::default()
    };
    assert_panics!({ saturated.calls() }, "integer overflow in addition");
}

#[test]
fn test_fixed_buffer() {
    let mut backing = AlignedBytes::<256>::new();
    let buffer = FixedBuffer::new(&mut backing.0);
    assert_eq!(buffer.capacity(), 256);

    round_trip(&buffer);
    assert_eq!(buffer.used(), 0, "Freeing the last allocation should give its memory back.");

    let first = buffer.alloc(10);
    let second = buffer.alloc(10);
    assert_eq!(buffer.used(), 26, "The second allocation should start on an aligned offset.");

    unsafe {
        assert!(buffer.resize(second, 100), "The last allocation should grow in place.");
        assert!(!buffer.resize(first, 20), "An earlier allocation can't grow.");
        assert!(buffer.resize(first, 5), "An earlier allocation can still shrink.");
        assert!(!buffer.resize(second.with_len(100), 1000));

        buffer.free(first);
        assert_eq!(buffer.used(), 116, "Freeing an earlier allocation shouldn't move the end.");
        buffer.free(second.with_len(100));
        assert_eq!(buffer.used(), 16);
    }

    assert!(buffer.alloc(1000).is_empty(), "An oversized allocation should fail.");
}

#[test]
fn test_out_of_memory() {
    let mut backing = AlignedBytes::<64>::new();
    let buffer = FixedBuffer::new(&mut backing.0);

    let outcome = buffer.try_alloc_array::<u64>(9);
    assert!(outcome.has_error::<OutOfMemory>());
    assert_eq!(outcome.error::<OutOfMemory>().bytes, 72);
    assert!(outcome.any_error().is_out_of_memory());

    let region = buffer.alloc_array::<u64>(8);
    let outcome = unsafe { buffer.try_realloc_array(region, 9) };
    assert!(outcome.has_error::<OutOfMemory>());
    unsafe { buffer.free_array(region) };

    assert_panics!(
        { buffer.alloc_array::<u64>(9) },
        "memory allocation of 72 bytes failed"
    );
}

#[test]
fn test_capacity_overflow() {
    let outcome = Global.try_alloc_array::<u64>(usize::MAX / 4);
    assert!(outcome.has_error::<CapacityOverflow>());
    let error = outcome.into_result().unwrap_err();
    assert!(error.is_capacity_overflow());
    assert!(CapacityOverflow::try_from(error).is_ok());

    let outcome = Global.try_alloc_array::<u8>(isize::MAX as usize + 1);
    assert!(outcome.has_error::<CapacityOverflow>(), "Sizes past isize::MAX should be rejected.");

    assert_panics!({ Global.alloc_array::<u64>(usize::MAX) }, "capacity overflow");
}

#[test]
fn test_zst_support() {
    let alloc = Counting::new(Global);

    let region = alloc.alloc_array::<ZeroSizedType>(usize::MAX);
    assert_eq!(region.len(), usize::MAX);
    let region = unsafe { alloc.realloc_array(region, 3) };
    assert_eq!(region.len(), 3);
    unsafe { alloc.free_array(region) };

    let item = alloc.create(ZeroSizedType);
    assert_eq!(unsafe { alloc.destroy(item) }, ZeroSizedType);

    assert_eq!(alloc.stats().calls(), 0, "ZSTs shouldn't reach the allocator.");
}

#[test]
fn test_create_destroy() {
    let alloc = Counting::new(Global);

    let item = alloc.create(String::from("boxed"));
    assert_eq!(unsafe { item.as_ref() }, "boxed");
    assert_eq!(alloc.stats().live_bytes, size_of::<String>());

    assert_eq!(unsafe { alloc.destroy(item) }, "boxed");
    assert_eq!(alloc.stats().live_bytes, 0);
}

#[test]
fn test_over_aligned() {
    assert_panics!(
        { Global.alloc_array::<OverAligned>(1) },
        "alignment 64 exceeds the allocator guarantee of 16"
    );
    assert_panics!({ Global.try_alloc_array::<OverAligned>(1) });
}

#[test]
fn test_region() {
    let empty = Region::<u32>::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.as_ptr(), NonNull::dangling());
    assert_eq!(empty.byte_len(), 0);

    let region = Global.alloc_array::<u32>(4);
    let bytes = region.into_bytes();
    assert_eq!(bytes.len(), 16);
    assert_eq!(bytes.as_ptr(), region.as_ptr().cast());
    assert_eq!(unsafe { bytes.into_typed::<u32>(4) }, region);

    unsafe { Global.free_array(region) };
}
