//! Screenshot -> PDF assembly
//!
//! Each screenshot becomes one page whose size in points equals the image
//! size in pixels (72 dpi). Images are embedded as baseline JPEG
//! (`DCTDecode`) with the encoder's default quality. PDF pages are opaque, so
//! alpha channels are discarded rather than composited.

use crate::{Error, Result};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use log::{debug, info};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

const IMAGE_NAME: &str = "Im0";

/// Decode one screenshot and normalise it to 8-bit RGB or gray.
pub(crate) fn decode_screenshot(bytes: &[u8]) -> image::ImageResult<DynamicImage> {
    let img = image::load_from_memory(bytes)?;
    let color = img.color();
    if color.has_alpha() {
        debug!("Dropping alpha channel from {:?} screenshot", color);
    }
    Ok(if color.has_color() {
        DynamicImage::ImageRgb8(img.to_rgb8())
    } else {
        DynamicImage::ImageLuma8(img.to_luma8())
    })
}

/// Append one image page to `doc` under `pages_id`.
fn add_image_page(doc: &mut Document, pages_id: ObjectId, img: &DynamicImage) -> Result<ObjectId> {
    let (width, height) = (img.width() as i64, img.height() as i64);

    let mut jpeg = Vec::new();
    img.write_with_encoder(JpegEncoder::new(&mut jpeg))
        .map_err(|e| Error::AssemblyError(format!("Failed converting screenshots to pdf {}", e)))?;

    let color_space = if img.color().has_color() { "DeviceRGB" } else { "DeviceGray" };
    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width,
            "Height" => height,
            "ColorSpace" => color_space,
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg,
    ));

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    width.into(),
                    0.into(),
                    0.into(),
                    height.into(),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.as_bytes().to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), width.into(), height.into()],
        "Resources" => dictionary! {
            "XObject" => dictionary! { IMAGE_NAME => image_id },
        },
        "Contents" => content_id,
    }))
}

/// Assemble decoded images into one serialized PDF, first image first.
pub(crate) fn assemble(images: &[DynamicImage]) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids = images
        .iter()
        .map(|img| add_image_page(&mut doc, pages_id, img).map(Object::Reference))
        .collect::<Result<Vec<_>>>()?;

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out)
        .map_err(|e| Error::AssemblyError(format!("Failed converting screenshots to pdf {}", e)))?;
    Ok(out)
}

/// Stitch screenshots into a single multi-page PDF in input order.
pub fn build_pdf_from_screenshots<B: AsRef<[u8]>>(snapshots: &[B]) -> Result<Vec<u8>> {
    if snapshots.is_empty() {
        return Err(Error::NoScreenshots);
    }

    let images = snapshots
        .iter()
        .enumerate()
        .map(|(i, snap)| {
            decode_screenshot(snap.as_ref())
                .map_err(|e| Error::DecodeError(format!("Failed decoding screenshot {}: {}", i, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("building pdf from {} screenshots", images.len());
    assemble(&images)
}
