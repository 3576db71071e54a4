//! File-in, file-out pipeline test mirroring what the binary does.

use px_core::palette::Palette;

#[test]
fn image_file_to_ascii_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("art.txt");

    let img = image::RgbaImage::from_pixel(200, 100, image::Rgba([0, 0, 0, 255]));
    img.save(&input).unwrap();

    let frame = px_convert::load_image(&input).unwrap();
    let art = px_convert::convert(&frame, 100, &Palette::classic(), 0.55).unwrap();
    std::fs::write(&output, art.to_string()).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 27);
    assert!(lines.iter().all(|l| *l == "@".repeat(100)));
}
