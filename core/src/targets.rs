// Log targets for the `tracing` macros used across the crate

macro_rules! tracing_targets {
    {$( $name:ident = $val:expr ),* $(,)?} => {
        $( pub const $name: &str = concat!(env!("CARGO_PKG_NAME"), "::", $val); )*
    };
}

tracing_targets! {
    SEED = "seed",
    NOISE = "noise",
}
