//! Hardware entropy: CPU timestamp / cycle counters.

#[cfg(target_arch = "x86_64")]
pub fn source_name() -> &'static str {
    "rdtsc"
}

#[cfg(target_arch = "aarch64")]
pub fn source_name() -> &'static str {
    "cycle counter"
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn source_name() -> &'static str {
    "system clock"
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn entropy() -> u64 {
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn entropy() -> u64 {
    let cnt: u64;
    unsafe { core::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt) }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
pub fn entropy() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() as u64 ^ d.as_secs())
        .unwrap_or(0)
}
