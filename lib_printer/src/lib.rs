use std::sync::atomic::{AtomicBool, Ordering};

/// Controls whether `out!` writes anything at all.
/// Batch runs flip this off so hundreds of games don't flood the terminal.
static VERBOSE: AtomicBool = AtomicBool::new(true);

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! out {
    ($($arg:tt)*) => (out_impl(format!($($arg)*)))
}

#[cfg(not(test))]
pub fn out_impl(s: String) {
    if is_verbose() {
        println!("{}", s);
    }
}

#[cfg(test)]
pub fn out_impl(_s: String) {}

#[allow(unused)]
fn test_out() {
    out!("{}{}", "hello", "world");
}
