//! The external `maxofthree` routine.
//!
//! Contract: given three signed 64-bit integers, return the greatest. Pure,
//! total, no side effects.
//!
//! Calling convention, fixed per architecture:
//!
//! | Target  | ABI                 | Arguments        | Result |
//! |---------|---------------------|------------------|--------|
//! | x86-64  | System V (`sysv64`) | `rdi, rsi, rdx`  | `rax`  |
//! | AArch64 | AAPCS64 (`C`)       | `x0, x1, x2`     | `x0`   |
//! | other   | Rust `extern "C"`   | platform default | —      |
//!
//! x86-64 uses `sysv64` on every OS, including Windows, so the same register
//! assignment holds wherever the assembly is linked.

#[cfg(target_vendor = "apple")]
#[allow(unused_macros)]
macro_rules! asm_symbol {
    ($name:literal) => {
        concat!("_", $name)
    };
}

#[cfg(not(target_vendor = "apple"))]
#[allow(unused_macros)]
macro_rules! asm_symbol {
    ($name:literal) => {
        $name
    };
}

#[cfg(target_arch = "x86_64")]
core::arch::global_asm!(
    ".text",
    ".p2align 4",
    concat!(".globl ", asm_symbol!("maxofthree")),
    concat!(asm_symbol!("maxofthree"), ":"),
    "    mov rax, rdi",
    "    cmp rax, rsi",
    "    cmovl rax, rsi",
    "    cmp rax, rdx",
    "    cmovl rax, rdx",
    "    ret",
);

#[cfg(target_arch = "aarch64")]
core::arch::global_asm!(
    ".text",
    ".p2align 2",
    concat!(".globl ", asm_symbol!("maxofthree")),
    concat!(asm_symbol!("maxofthree"), ":"),
    "    cmp x0, x1",
    "    csel x0, x0, x1, ge",
    "    cmp x0, x2",
    "    csel x0, x0, x2, ge",
    "    ret",
);

#[cfg(target_arch = "x86_64")]
extern "sysv64" {
    fn maxofthree(a: i64, b: i64, c: i64) -> i64;
}

#[cfg(target_arch = "aarch64")]
extern "C" {
    fn maxofthree(a: i64, b: i64, c: i64) -> i64;
}

// Not `#[no_mangle]`: on wasm32 that would add a third export to the shim.
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
extern "C" fn maxofthree(a: i64, b: i64, c: i64) -> i64 {
    maxthree_primitives::reference::max_of_three(a, b, c)
}

/// Which implementation of `maxofthree` this build links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineKind {
    /// Hand-written x86-64 assembly, System V convention.
    Amd64Asm,
    /// Hand-written AArch64 assembly, AAPCS64 convention.
    Aarch64Asm,
    /// Rust fallback with the same contract.
    Portable,
}

impl RoutineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amd64Asm => "amd64-asm",
            Self::Aarch64Asm => "aarch64-asm",
            Self::Portable => "portable",
        }
    }
}

impl core::fmt::Display for RoutineKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report the linked implementation.
pub const fn routine_kind() -> RoutineKind {
    if cfg!(target_arch = "x86_64") {
        RoutineKind::Amd64Asm
    } else if cfg!(target_arch = "aarch64") {
        RoutineKind::Aarch64Asm
    } else {
        RoutineKind::Portable
    }
}

/// Call `maxofthree`.
#[inline]
pub fn max_of_three(a: i64, b: i64, c: i64) -> i64 {
    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    // SAFETY: the routine reads only its three argument registers, writes only
    // the result register and flags, and touches no memory or stack.
    let max = unsafe { maxofthree(a, b, c) };

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    let max = maxofthree(a, b, c);

    max
}
