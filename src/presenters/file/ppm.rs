use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use log::info;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();
        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        write_ppm(frame, &mut file)?;
        file.flush()?;

        info!(
            "wrote {}x{} frame to {}",
            frame.width(),
            frame.height(),
            filepath.display()
        );

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

/// Binary PPM (P6). Alpha is dropped.
pub fn write_ppm(frame: &FrameBuffer, writer: &mut impl Write) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", frame.width(), frame.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&frame.to_rgb8())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Rgba;
    use crate::core::data::viewport::Viewport;

    #[test]
    fn test_write_ppm_header_and_body() {
        let frame = FrameBuffer::from_data(
            Viewport::new(2, 1).unwrap(),
            vec![Rgba(0xFF00_00FF), Rgba(0x0000_FF00)],
        )
        .unwrap();
        let mut out = Vec::new();

        write_ppm(&frame, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 255]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_writes_file() {
        let frame = FrameBuffer::new(Viewport::new(3, 2).unwrap());
        let path = std::env::temp_dir().join(format!(
            "mandelbrot_explorer_ppm_test_{}.ppm",
            std::process::id()
        ));

        PpmFilePresenter::new().present(&frame, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(bytes.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(bytes.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }

    #[test]
    fn test_present_reports_missing_directory() {
        let frame = FrameBuffer::new(Viewport::new(1, 1).unwrap());
        let path = std::env::temp_dir()
            .join("mandelbrot_explorer_missing_dir")
            .join("nested")
            .join("out.ppm");

        assert!(PpmFilePresenter::new().present(&frame, &path).is_err());
    }
}
