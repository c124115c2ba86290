#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn open_in_new_tab_is_noop_but_callable() {
    open_in_new_tab("https://example.com/file.mp3");
    open_in_new_tab("");
}
