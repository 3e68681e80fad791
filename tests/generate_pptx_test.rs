use image::{ImageBuffer, Rgb};
use pitchdeck::{generate_pptx, DeckError, PptxConfig};
use std::fs;
use tempfile::TempDir;

fn png_config() -> PptxConfig {
    PptxConfig {
        pattern: "page_*.png".to_string(),
        ..PptxConfig::default()
    }
}

#[test]
fn test_generate_pptx_from_pages() {
    // Create temporary directory with two staged pages
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let pages_dir = temp_dir.path().join("pages");
    fs::create_dir(&pages_dir).expect("Failed to create pages directory");

    let page1_path = pages_dir.join("page_0001.png");
    let page2_path = pages_dir.join("page_0002.png");

    // Two simple colored images
    let red_img = ImageBuffer::from_fn(100, 100, |_, _| Rgb([255u8, 0u8, 0u8]));
    let blue_img = ImageBuffer::from_fn(100, 100, |_, _| Rgb([0u8, 0u8, 255u8]));
    red_img.save(&page1_path).expect("Failed to save red image");
    blue_img
        .save(&page2_path)
        .expect("Failed to save blue image");

    let output_path = temp_dir.path().join("output.pptx");
    generate_pptx(&pages_dir, &output_path, &png_config()).expect("PPTX generation failed");

    assert!(output_path.exists(), "PPTX file was not created");

    // Inspect the package: one slide part and one media file per page
    let file = fs::File::open(&output_path).expect("Failed to open PPTX");
    let mut archive = zip::ZipArchive::new(file).expect("PPTX is not a valid ZIP");

    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();

    assert!(names.contains(&"[Content_Types].xml".to_string()));
    assert!(names.contains(&"ppt/presentation.xml".to_string()));
    assert!(names.contains(&"ppt/slides/slide1.xml".to_string()));
    assert!(names.contains(&"ppt/slides/slide2.xml".to_string()));
    assert!(!names.contains(&"ppt/slides/slide3.xml".to_string()));

    // Pages keep catalog order: media/image1 is the first staged page
    use std::io::Read;
    let mut embedded = Vec::new();
    archive
        .by_name("ppt/media/image1.png")
        .expect("first page image missing")
        .read_to_end(&mut embedded)
        .expect("Failed to read embedded image");
    let original = fs::read(&page1_path).expect("Failed to read source image");
    assert_eq!(embedded, original, "first page should embed the first image");
}

#[test]
fn test_generate_pptx_fails_without_pages() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let pages_dir = temp_dir.path().join("pages");
    fs::create_dir(&pages_dir).expect("Failed to create pages directory");

    let output_path = temp_dir.path().join("output.pptx");
    let result = generate_pptx(&pages_dir, &output_path, &png_config());

    assert!(matches!(result, Err(DeckError::NoPagesError)));
    assert!(!output_path.exists());
}

#[test]
fn test_generate_pptx_rejects_corrupt_page_without_partial_output() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let pages_dir = temp_dir.path().join("pages");
    fs::create_dir(&pages_dir).expect("Failed to create pages directory");

    // A page that is not a decodable image
    fs::write(pages_dir.join("page_0001.png"), b"not an image").expect("Failed to write page");

    let output_path = temp_dir.path().join("output.pptx");
    let result = generate_pptx(&pages_dir, &output_path, &png_config());

    assert!(result.is_err());
    assert!(!output_path.exists(), "no artifact on failure");

    // No stray partial file either
    let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains("partial"))
        .collect();
    assert!(leftovers.is_empty(), "partial staging file left behind");
}
