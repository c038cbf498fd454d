pub const PIXEL_BYTES: usize = 4;

pub struct RenderFrame<'a> {
    pub width: u32,
    pub height: u32,
    pub buffer: &'a mut [u8],
}

impl RenderFrame<'_> {
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8; PIXEL_BYTES]> {
        self.buffer
            .chunks_exact_mut(PIXEL_BYTES)
            .filter_map(|chunk| chunk.try_into().ok())
    }

    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8; PIXEL_BYTES]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = (x as usize + y as usize * self.width as usize) * PIXEL_BYTES;
        self.buffer.get_mut(index..index + PIXEL_BYTES)?.try_into().ok()
    }

    pub fn draw_pixel(&mut self, x: u32, y: u32, color: [u8; PIXEL_BYTES]) {
        if let Some(pixel) = self.pixel_mut(x, y) {
            *pixel = color;
        }
    }

    /// Pixels outside the frame are skipped.
    pub fn draw_square(&mut self, x: u32, y: u32, width: u32, height: u32, color: [u8; PIXEL_BYTES]) {
        for y in y..y.saturating_add(height).min(self.height) {
            for x in x..x.saturating_add(width).min(self.width) {
                self.draw_pixel(x, y, color);
            }
        }
    }

    pub fn fill(&mut self, color: [u8; PIXEL_BYTES]) {
        for pixel in self.pixels_mut() {
            *pixel = color;
        }
    }
}
