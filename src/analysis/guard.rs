use crate::analysis::buffer::PixelBuffer;

/// Returns true when every RGBA quadruple in the buffer is identical.
///
/// Short-circuits on the first quadruple that differs from the first one
/// observed, so the common multi-color case is amortized O(1); only a
/// genuinely uniform image pays the full scan. Alpha participates in
/// distinctness, matching what a viewer would treat as "the same pixel".
pub fn is_single_color(buffer: &PixelBuffer) -> bool {
    let mut pixels = buffer.pixels();
    match pixels.next() {
        Some(first) => pixels.all(|px| px == first),
        None => true,
    }
}
