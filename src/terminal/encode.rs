use std::io::Write;

use super::canvas::PixelCanvas;
use crate::color::Rgb;

/// Encodes the canvas as half-block cells: the background color is the top
/// pixel, the `▄` foreground the bottom one. Color escapes are only emitted
/// when a color changes within a row. Overlay text is written last.
pub fn encode_frame(canvas: &PixelCanvas, out: &mut Vec<u8>) -> std::io::Result<()> {
    out.clear();
    out.extend_from_slice(b"\x1b[H");

    let (width, height) = (canvas.width(), canvas.height());

    for y in (0..height).step_by(2) {
        // Reset at every row end, so each row starts by emitting both colors.
        let mut prev_top: Option<Rgb> = None;
        let mut prev_bot: Option<Rgb> = None;

        for x in 0..width {
            let top = canvas.pixel(x, y);
            let bot = if y + 1 < height {
                canvas.pixel(x, y + 1)
            } else {
                top
            };

            if prev_top != Some(top) {
                write!(out, "\x1b[48;2;{};{};{}m", top.r, top.g, top.b)?;
                prev_top = Some(top);
            }
            if prev_bot != Some(bot) {
                write!(out, "\x1b[38;2;{};{};{}m", bot.r, bot.g, bot.b)?;
                prev_bot = Some(bot);
            }

            out.extend_from_slice("▄".as_bytes());
        }

        out.extend_from_slice(b"\x1b[0m");
        if y + 2 < height {
            out.extend_from_slice(b"\r\n");
        }
    }

    for text in canvas.overlay() {
        let row = (text.origin.y.max(0.0) / 2.0) as usize + 1;
        let col = text.origin.x.max(0.0) as usize + 1;
        write!(
            out,
            "\x1b[{row};{col}H\x1b[38;2;{};{};{}m{}\x1b[0m",
            text.color.r, text.color.g, text.color.b, text.text
        )?;
    }

    Ok(())
}
