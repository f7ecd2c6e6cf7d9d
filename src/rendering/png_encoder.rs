use crate::error::EncodeError;
use ink_remap::RasterBuffer;
use std::io::Cursor;

/// Encode a page as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &RasterBuffer) -> Result<Vec<u8>, EncodeError> {
    if buffer.is_empty() {
        return Err(EncodeError::EmptyImage {
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| EncodeError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(buffer.as_bytes())
            .map_err(|e| EncodeError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
