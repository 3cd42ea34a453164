/// maps a flat pixel index onto `(x, y)`, row by row
///
/// The index is reduced modulo the pixel count first, so out of range indices wrap around.
/// `width` and `height` must not be zero.
#[inline]
pub fn index_to_coordinates(index: usize, width: u32, height: u32) -> (u32, u32) {
    let width = width as usize;
    let index = index % (width * height as usize);
    ((index % width) as u32, (index / width) as u32)
}
