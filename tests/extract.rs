use std::fs;
use std::path::Path;

use image::{DynamicImage, GenericImageView, GrayImage, Luma, Rgb, RgbImage};
use qrcode::QrCode;
use qrcrop::{CropBox, CropFractions, Cropper, Error};

fn write_photo(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 251) as u8, (y % 241) as u8, ((x + y) % 239) as u8])
    });
    img.save(path).expect("write fixture");
}

#[test]
fn scenario_a_crops_160x160_from_1000x800() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("IMG_6328.png");
    let output = dir.path().join("qrcode_extracted.png");
    write_photo(&input, 1000, 800);

    let extraction = Cropper::default().extract(&input, &output).unwrap();
    assert_eq!(extraction.source_dimensions, (1000, 800));
    assert_eq!(
        extraction.crop_box,
        CropBox {
            left: 420,
            top: 520,
            right: 580,
            bottom: 680
        }
    );

    let written = image::open(&output).unwrap();
    assert_eq!(written.dimensions(), (160, 160));
    assert_eq!(written.dimensions(), extraction.output_dimensions());

    // lossless output keeps exact pixels of the half-open region
    let written = written.to_rgb8();
    let expected = |x: u32, y: u32| Rgb([(x % 251) as u8, (y % 241) as u8, ((x + y) % 239) as u8]);
    assert_eq!(written.get_pixel(0, 0), &expected(420, 520));
    assert_eq!(written.get_pixel(159, 159), &expected(579, 679));
}

#[test]
fn jpeg_in_jpeg_out_matches_crop_box() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("IMG_6328.jpg");
    let output = dir.path().join("qrcode_extracted.jpg");
    write_photo(&input, 640, 480);

    let extraction = Cropper::default().extract(&input, &output).unwrap();
    let bbox = CropBox::from_fractions(640, 480, &CropFractions::default());
    assert_eq!(extraction.crop_box, bbox);
    assert_eq!(image::open(&output).unwrap().dimensions(), bbox.dimensions());
}

#[test]
fn source_file_is_not_modified() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    write_photo(&input, 300, 200);
    let before = fs::read(&input).unwrap();

    Cropper::default()
        .extract(&input, &dir.path().join("out.png"))
        .unwrap();

    assert_eq!(fs::read(&input).unwrap(), before);
}

#[test]
fn repeated_runs_produce_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.jpg");
    let output = dir.path().join("qr.jpg");
    write_photo(&input, 800, 600);

    let cropper = Cropper::default();
    cropper.extract(&input, &output).unwrap();
    let first = fs::read(&output).unwrap();
    cropper.extract(&input, &output).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn scenario_b_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.jpg");

    let err = Cropper::default()
        .extract(&dir.path().join("does-not-exist.jpg"), &output)
        .unwrap_err();

    assert!(matches!(err, Error::NotFound(_)), "{err:?}");
    assert!(!output.exists());
}

#[test]
fn scenario_c_undecodable_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.jpg");
    let output = dir.path().join("out.jpg");
    fs::write(&input, "this is a text file, not a photo\n").unwrap();

    let err = Cropper::default().extract(&input, &output).unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "{err:?}");
    assert!(!output.exists());
}

#[test]
fn scenario_d_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    let output = dir.path().join("no").join("such").join("dir").join("qr.png");
    write_photo(&input, 100, 100);

    let err = Cropper::default().extract(&input, &output).unwrap_err();

    assert!(matches!(err, Error::Write { .. }), "{err:?}");
    assert!(!output.exists());
}

#[test]
fn one_pixel_source_is_rejected_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dot.png");
    let output = dir.path().join("dot-out.png");
    write_photo(&input, 1, 1);

    let err = Cropper::default().extract(&input, &output).unwrap_err();

    assert!(matches!(err, Error::Encode { .. }), "{err:?}");
    assert!(!output.exists());
}

#[test]
fn extracted_region_still_decodes_as_qr() {
    let text = "https://example.org/vue-10";
    let code = QrCode::new(text.as_bytes()).unwrap();
    let symbol = code
        .render::<Luma<u8>>()
        .max_dimensions(150, 150)
        .build();
    assert!(symbol.width() <= 150 && symbol.height() <= 150);

    // mid-grey backdrop, symbol pasted inside the default crop region
    let mut photo = GrayImage::from_pixel(1000, 800, Luma([128]));
    image::imageops::overlay(&mut photo, &symbol, 425, 525);

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("panel.png");
    let output = dir.path().join("qr.png");
    DynamicImage::ImageLuma8(photo).save(&input).unwrap();

    Cropper::default().extract(&input, &output).unwrap();

    let cropped = image::open(&output).unwrap().to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare(cropped);
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1);
    let (_meta, content) = grids[0].decode().unwrap();
    assert_eq!(content, text);
}
