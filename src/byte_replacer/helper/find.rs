/// Offset of the first occurrence of `needle` in `haystack`.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    let position = haystack
        .windows(needle.len())
        .position(|window| window == needle);
    log::trace!(
        "find(haystack.len()={}, needle={:02x?}) = {:?}",
        haystack.len(),
        needle,
        position
    );
    position
}
