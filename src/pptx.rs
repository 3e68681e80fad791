// ABOUTME: PPTX assembly module for the pitchdeck application
// ABOUTME: Packs captured page images into a PowerPoint document, one per slide

use crate::errors::{DeckError, Result};
use chrono;
use glob;
use image::io::Reader as ImageReader;
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::{ZipWriter, write::FileOptions};

/// Slide geometry in EMUs for the fixed 16:9 landscape canvas.
const PAGE_CX: u64 = 9144000;
const PAGE_CY: u64 = 5143500;

/// Configuration for PPTX assembly
pub struct PptxConfig {
    pub title: String,
    pub pattern: String,
}

impl Default for PptxConfig {
    fn default() -> Self {
        Self {
            title: "Vincent Creation Proposal".to_string(),
            pattern: "page_*.jpg".to_string(),
        }
    }
}

/// Collect staged page images matching a pattern, in name order. The export
/// pipeline names pages `page_0001.jpg` onward, so lexicographic order is
/// catalog order.
pub fn find_page_images(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let glob_pattern = format!("{}/{}", dir.to_string_lossy(), pattern);
    let mut paths = Vec::new();

    for entry in (glob::glob(&glob_pattern)
        .map_err(|e| DeckError::PptxError(format!("Invalid glob pattern: {}", e)))?)
    .flatten()
    {
        paths.push(entry);
    }

    paths.sort();

    if paths.is_empty() {
        return Err(DeckError::NoPagesError);
    }

    Ok(paths)
}

/// Assemble a PPTX document from staged page images, one full-bleed page per
/// image in order. The document is written to a `.partial` sibling of the
/// output path and only renamed into place once the archive is finalized, so
/// a failure never leaves a partial artifact at the output path.
pub fn generate_pptx(pages_dir: &Path, output_file: &Path, config: &PptxConfig) -> Result<()> {
    info!("Assembling PPTX from pages in {:?}", pages_dir);

    if !pages_dir.exists() || !pages_dir.is_dir() {
        return Err(DeckError::PathNotFoundError(pages_dir.to_path_buf()));
    }

    crate::utils::ensure_parent_directory_exists(output_file)?;

    let page_paths = find_page_images(pages_dir, &config.pattern)?;
    info!("Found {} page images", page_paths.len());

    // Read and validate every page up front; an undecodable capture aborts
    // the whole assembly instead of producing a deck with missing pages.
    let mut pages = Vec::with_capacity(page_paths.len());
    for path in &page_paths {
        let data = fs::read(path)?;
        ImageReader::open(path)
            .map_err(|e| DeckError::PptxError(format!("Failed to open image {:?}: {}", path, e)))?
            .decode()
            .map_err(|e| {
                DeckError::PptxError(format!("Failed to decode image {:?}: {}", path, e))
            })?;
        let ext = path
            .extension()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        pages.push((data, ext));
    }

    let partial_path = staging_path(output_file);
    let file = fs::File::create(&partial_path)?;
    let mut zip = ZipWriter::new(file);

    let result = write_package(&mut zip, &pages, config);
    match result.and_then(|_| zip.finish().map_err(DeckError::from)) {
        Ok(_) => {
            fs::rename(&partial_path, output_file)?;
            info!("PPTX file created at {:?}", output_file);
            Ok(())
        }
        Err(e) => {
            let _ = fs::remove_file(&partial_path);
            Err(e)
        }
    }
}

fn staging_path(output_file: &Path) -> PathBuf {
    let mut name = output_file
        .file_name()
        .unwrap_or_default()
        .to_os_string();
    name.push(".partial");
    output_file.with_file_name(name)
}

fn write_package(
    zip: &mut ZipWriter<fs::File>,
    pages: &[(Vec<u8>, String)],
    config: &PptxConfig,
) -> Result<()> {
    // [Content_Types].xml
    zip.start_file("[Content_Types].xml", FileOptions::default())?;
    let content_types = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="jpeg" ContentType="image/jpeg"/>
    <Default Extension="jpg" ContentType="image/jpeg"/>
    <Default Extension="png" ContentType="image/png"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
    {slides}
</Types>"#,
        slides = (1..=pages.len()).map(|i| {
            format!(r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#, i)
        }).collect::<Vec<String>>().join("\n")
    );
    zip.write_all(content_types.as_bytes())?;

    // _rels/.rels
    zip.start_file("_rels/.rels", FileOptions::default())?;
    let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;
    zip.write_all(rels.as_bytes())?;

    // docProps/app.xml
    zip.start_file("docProps/app.xml", FileOptions::default())?;
    let app_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>pitchdeck</Application>
    <Slides>{}</Slides>
</Properties>"#,
        pages.len()
    );
    zip.write_all(app_xml.as_bytes())?;

    // docProps/core.xml
    zip.start_file("docProps/core.xml", FileOptions::default())?;
    let core_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>pitchdeck</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        quick_xml::escape::escape(config.title.as_str()),
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    );
    zip.write_all(core_xml.as_bytes())?;

    // ppt/_rels/presentation.xml.rels
    zip.start_file("ppt/_rels/presentation.xml.rels", FileOptions::default())?;
    let mut pres_rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );
    for i in 1..=pages.len() {
        pres_rels.push_str(&format!(
            r#"    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            i, i
        ));
        pres_rels.push('\n');
    }
    pres_rels.push_str("</Relationships>");
    zip.write_all(pres_rels.as_bytes())?;

    // ppt/presentation.xml
    zip.start_file("ppt/presentation.xml", FileOptions::default())?;
    let presentation_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}" type="screen4x3"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        slide_ids = (0..pages.len())
            .map(|i| format!(r#"        <p:sldId id="{}" r:id="rId{}"/>"#, 256 + i, i + 1))
            .collect::<Vec<String>>()
            .join("\n"),
        cx = PAGE_CX,
        cy = PAGE_CY
    );
    zip.write_all(presentation_xml.as_bytes())?;

    // One media file, one rels file and one slide part per page, in order.
    for (i, (data, ext)) in pages.iter().enumerate() {
        let slide_num = i + 1;
        let image_name = format!("image{}.{}", slide_num, ext);

        zip.start_file(format!("ppt/media/{}", image_name), FileOptions::default())?;
        zip.write_all(data)?;

        zip.start_file(
            format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
            FileOptions::default(),
        )?;
        let slide_rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/{}"/>
</Relationships>"#,
            image_name
        );
        zip.write_all(slide_rels.as_bytes())?;

        zip.start_file(
            format!("ppt/slides/slide{}.xml", slide_num),
            FileOptions::default(),
        )?;
        let slide_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld>
        <p:spTree>
            <p:nvGrpSpPr>
                <p:cNvPr id="1" name=""/>
                <p:cNvGrpSpPr/>
                <p:nvPr/>
            </p:nvGrpSpPr>
            <p:grpSpPr>
                <a:xfrm>
                    <a:off x="0" y="0"/>
                    <a:ext cx="0" cy="0"/>
                    <a:chOff x="0" y="0"/>
                    <a:chExt cx="0" cy="0"/>
                </a:xfrm>
            </p:grpSpPr>
            <p:pic>
                <p:nvPicPr>
                    <p:cNvPr id="2" name="Page"/>
                    <p:cNvPicPr>
                        <a:picLocks noChangeAspect="1"/>
                    </p:cNvPicPr>
                    <p:nvPr/>
                </p:nvPicPr>
                <p:blipFill>
                    <a:blip r:embed="rId1"/>
                    <a:stretch>
                        <a:fillRect/>
                    </a:stretch>
                </p:blipFill>
                <p:spPr>
                    <a:xfrm>
                        <a:off x="0" y="0"/>
                        <a:ext cx="{cx}" cy="{cy}"/>
                    </a:xfrm>
                    <a:prstGeom prst="rect">
                        <a:avLst/>
                    </a:prstGeom>
                </p:spPr>
            </p:pic>
        </p:spTree>
    </p:cSld>
    <p:clrMapOvr>
        <a:masterClrMapping/>
    </p:clrMapOvr>
</p:sld>"#,
            cx = PAGE_CX,
            cy = PAGE_CY
        );
        zip.write_all(slide_xml.as_bytes())?;
    }

    Ok(())
}
