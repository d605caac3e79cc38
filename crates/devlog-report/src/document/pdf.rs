//! Serialization of laid-out pages with `pdf-writer`.
//!
//! Nothing time- or randomness-dependent is written, so equal pages and
//! images always produce equal bytes.

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::RgbImage;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str};

use super::layout::{DrawOp, FontFace, PAGE_HEIGHT, PAGE_WIDTH, Page};
use super::metrics::encode;
use crate::error::RenderError;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");
const IMAGE_COMPRESSION: u32 = 6;

fn image_name(index: usize) -> String {
    format!("Im{index}")
}

fn to_i32<T>(value: T, what: &str) -> Result<i32, RenderError>
where
    T: TryInto<i32> + Copy + std::fmt::Display,
{
    value
        .try_into()
        .map_err(|_| RenderError::Layout(format!("{what} out of range: {value}")))
}

fn deflate(raw: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(IMAGE_COMPRESSION));
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

fn channel(value: u8) -> f32 {
    f32::from(value) / 255.0
}

fn content_stream(page: &Page) -> Vec<u8> {
    let mut content = Content::new();
    for op in &page.ops {
        match op {
            DrawOp::Text {
                x,
                y,
                size,
                face,
                text,
            } => {
                let font = match face {
                    FontFace::Regular => FONT_REGULAR,
                    FontFace::Bold => FONT_BOLD,
                };
                content.begin_text();
                content.set_font(font, *size);
                content.next_line(*x, *y);
                content.show(Str(&encode(text)));
                content.end_text();
            }
            DrawOp::Image {
                index,
                x,
                y,
                width,
                height,
            } => {
                let name = image_name(*index);
                content.save_state();
                content.transform([*width, 0.0, 0.0, *height, *x, *y]);
                content.x_object(Name(name.as_bytes()));
                content.restore_state();
            }
            DrawOp::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => {
                content.save_state();
                content.set_fill_rgb(channel(color[0]), channel(color[1]), channel(color[2]));
                content.rect(*x, *y, *width, *height);
                content.fill_nonzero();
                content.restore_state();
            }
            DrawOp::Line { x1, y1, x2, y2 } => {
                content.save_state();
                content.set_line_width(0.5);
                content.set_stroke_gray(0.6);
                content.move_to(*x1, *y1);
                content.line_to(*x2, *y2);
                content.stroke();
                content.restore_state();
            }
        }
    }
    content.finish()
}

/// Serialize `pages` into a complete PDF. `images` are addressed by the
/// `index` of each [`DrawOp::Image`].
///
/// # Errors
///
/// Returns `RenderError::Layout` if a page references a missing image, or
/// `RenderError::Io` if image compression fails.
pub fn write(pages: &[Page], images: &[&RgbImage]) -> Result<Vec<u8>, RenderError> {
    let mut next = Ref::new(1);
    let catalog_id = next.bump();
    let tree_id = next.bump();
    let regular_id = next.bump();
    let bold_id = next.bump();
    let image_ids: Vec<Ref> = images.iter().map(|_| next.bump()).collect();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (next.bump(), next.bump())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(to_i32(pages.len(), "page count")?);

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (image, id) in images.iter().zip(&image_ids) {
        let compressed = deflate(image.as_raw())?;
        let mut xobject = pdf.image_xobject(*id, &compressed);
        xobject.filter(Filter::FlateDecode);
        xobject.width(to_i32(image.width(), "image width")?);
        xobject.height(to_i32(image.height(), "image height")?);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);
        xobject.finish();
    }

    for (page, (page_id, content_id)) in pages.iter().zip(&page_ids) {
        let used = page.image_indexes();
        if let Some(missing) = used.iter().find(|idx| **idx >= images.len()) {
            return Err(RenderError::Layout(format!(
                "page references image {missing} but only {} were supplied",
                images.len()
            )));
        }
        let names: Vec<(String, Ref)> = used
            .iter()
            .map(|idx| (image_name(*idx), image_ids[*idx]))
            .collect();

        let mut writer = pdf.page(*page_id);
        writer.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        writer.parent(tree_id);
        writer.contents(*content_id);
        let mut resources = writer.resources();
        let mut fonts = resources.fonts();
        fonts.pair(FONT_REGULAR, regular_id);
        fonts.pair(FONT_BOLD, bold_id);
        fonts.finish();
        if !names.is_empty() {
            let mut xobjects = resources.x_objects();
            for (name, id) in &names {
                xobjects.pair(Name(name.as_bytes()), *id);
            }
            xobjects.finish();
        }
        resources.finish();
        writer.finish();

        pdf.stream(*content_id, &content_stream(page));
    }

    Ok(pdf.finish())
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use pretty_assertions::assert_eq;

    use super::*;

    fn text_page(text: &str) -> Page {
        Page {
            ops: vec![DrawOp::Text {
                x: 50.0,
                y: 700.0,
                size: 12.0,
                face: FontFace::Bold,
                text: text.into(),
            }],
        }
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn writes_a_complete_document() {
        let bytes = write(&[text_page("Summary")], &[]).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"(Summary) Tj"));
        assert!(contains(&bytes, b"/Helvetica-Bold"));
        assert!(contains(&bytes, b"/WinAnsiEncoding"));
        assert!(contains(&bytes, b"%%EOF"));
    }

    #[test]
    fn images_are_flate_compressed() {
        let image = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        let page = Page {
            ops: vec![DrawOp::Image {
                index: 0,
                x: 0.0,
                y: 0.0,
                width: 40.0,
                height: 40.0,
            }],
        };
        let bytes = write(&[page], &[&image]).unwrap();
        assert!(contains(&bytes, b"/FlateDecode"));
        assert!(contains(&bytes, b"/Im0 Do"));
    }

    #[test]
    fn missing_image_is_a_layout_error() {
        let page = Page {
            ops: vec![DrawOp::Image {
                index: 3,
                x: 0.0,
                y: 0.0,
                width: 1.0,
                height: 1.0,
            }],
        };
        let err = write(&[page], &[]).expect_err("no images supplied");
        assert!(matches!(err, RenderError::Layout(_)));
    }

    #[test]
    fn output_is_deterministic() {
        let pages = [text_page("Same"), text_page("Input")];
        assert_eq!(write(&pages, &[]).unwrap(), write(&pages, &[]).unwrap());
    }
}
