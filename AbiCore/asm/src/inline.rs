//! Register-level add sequence embedded with `asm!`.
//!
//! Sums three values in general-purpose registers. Arithmetic wraps on
//! overflow, as the hardware `add` does.

/// `a + b + c`, wrapping.
#[inline]
pub fn add_three(a: i64, b: i64, c: i64) -> i64 {
    add_three_impl(a, b, c)
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn add_three_impl(a: i64, b: i64, c: i64) -> i64 {
    let mut acc = a;
    // SAFETY: register-only arithmetic; no memory, no stack.
    unsafe {
        core::arch::asm!(
            "add {acc}, {b}",
            "add {acc}, {c}",
            acc = inout(reg) acc,
            b = in(reg) b,
            c = in(reg) c,
            options(pure, nomem, nostack),
        );
    }
    acc
}

#[cfg(target_arch = "aarch64")]
#[inline]
fn add_three_impl(a: i64, b: i64, c: i64) -> i64 {
    let mut acc = a;
    // SAFETY: register-only arithmetic; no memory, no stack.
    unsafe {
        core::arch::asm!(
            "add {acc}, {acc}, {b}",
            "add {acc}, {acc}, {c}",
            acc = inout(reg) acc,
            b = in(reg) b,
            c = in(reg) c,
            options(pure, nomem, nostack, preserves_flags),
        );
    }
    acc
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline]
fn add_three_impl(a: i64, b: i64, c: i64) -> i64 {
    a.wrapping_add(b).wrapping_add(c)
}
