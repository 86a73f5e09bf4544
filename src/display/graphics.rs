// embedded-graphics drawing target backed by the frame buffer

use core::convert::Infallible;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    Pixel,
};

use super::colors::Color;
use super::transport::Transport;
use super::Sh1106;

impl<T: Transport> OriginDimensions for Sh1106<T> {
    fn size(&self) -> Size {
        Size::new(self.width() as u32, self.height() as u32)
    }
}

impl<T: Transport> DrawTarget for Sh1106<T> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        // set_pixel clips, so off-panel points simply vanish
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.into());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = area.size.width.min(u16::MAX as u32) as u16;
        let h = area.size.height.min(u16::MAX as u32) as u16;
        self.fill_rect(area.top_left.x, area.top_left.y, w, h, color.into());
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(0, 0, w, h, Color::from(color));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DisplayConfig;
    use crate::display::simulator::PanelSimulator;
    use crate::display::Sh1106;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };
    use embedded_graphics_core::pixelcolor::BinaryColor;

    fn display() -> Sh1106<PanelSimulator> {
        Sh1106::new(PanelSimulator::new(128, 64), &DisplayConfig::default()).unwrap()
    }

    #[test]
    fn test_size_matches_panel() {
        let display = display();
        assert_eq!(display.size(), Size::new(128, 64));
    }

    #[test]
    fn test_line_through_draw_target() {
        let mut display = display();
        Line::new(Point::new(0, 0), Point::new(7, 7))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut display)
            .unwrap();
        for i in 0..8 {
            assert_eq!(display.frame_buffer().pixel(i, i), Some(true));
        }
        assert_eq!(display.frame_buffer().as_bytes()[0], 0x01);
    }

    #[test]
    fn test_fill_solid_clips_negative_origin() {
        let mut display = display();
        Rectangle::new(Point::new(-4, -4), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        assert_eq!(display.frame_buffer().as_bytes()[0], 0x0F);
        assert_eq!(display.frame_buffer().as_bytes()[3], 0x0F);
        assert_eq!(display.frame_buffer().as_bytes()[4], 0x00);
    }

    #[test]
    fn test_clear_on_and_off() {
        let mut display = display();
        DrawTarget::clear(&mut display, BinaryColor::On).unwrap();
        assert!(display.frame_buffer().as_bytes().iter().all(|&b| b == 0xFF));
        DrawTarget::clear(&mut display, BinaryColor::Off).unwrap();
        assert!(display.frame_buffer().as_bytes().iter().all(|&b| b == 0x00));
    }
}
