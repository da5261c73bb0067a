//! Browser entry point. Only does anything in a `csr` build; native builds
//! (used for unit tests) compile this to a no-op.

fn main() {
    #[cfg(feature = "csr")]
    chatbox::app::mount();
}
