#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "folio renders in the browser only. Build it with `trunk serve` (or `trunk build --release`); \
         run `cargo test` to exercise the interaction core natively."
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
