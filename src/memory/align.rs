/*!
 * Alignment Helpers
 */

use crate::core::types::Size;

/// Round `value` up to the next multiple of `align`
///
/// `align` must be a power of two. Returns `None` on overflow.
#[inline(always)]
pub const fn align_up(value: Size, align: Size) -> Option<Size> {
    debug_assert!(align.is_power_of_two());
    match value.checked_add(align - 1) {
        Some(v) => Some(v & !(align - 1)),
        None => None,
    }
}

/// Padding needed to bring `value` up to `align`
#[inline(always)]
pub const fn padding_for(value: Size, align: Size) -> Size {
    debug_assert!(align.is_power_of_two());
    value.wrapping_neg() & (align - 1)
}

/// Size of `T` rounded up to its alignment
///
/// Rust already pads `size_of` to a multiple of `align_of`, so this equals
/// `size_of::<T>()` for every sized type; it is kept explicit because the
/// fixed-capacity container sizes its block from it.
#[inline(always)]
pub const fn aligned_item_size<T>() -> Size {
    let size = std::mem::size_of::<T>();
    let align = std::mem::align_of::<T>();
    ((size + align - 1) / align) * align
}
