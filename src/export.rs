// ABOUTME: Export pipeline for the pitchdeck application
// ABOUTME: Renders every slide statically, captures pages and assembles the PPTX

use crate::catalog::SlideRecord;
use crate::errors::{DeckError, Result};
use crate::layout;
use crate::pptx::{self, PptxConfig};
use crate::utils;
use crate::viewer::ViewerState;
use headless_chrome::{Browser, LaunchOptionsBuilder};
use log::{info, warn};
use parking_lot::Mutex;
use reqwest::blocking::Client;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Fixed name of the exported artifact.
pub const EXPORT_FILE_NAME: &str = "Vincent-Creation-Proposal.pptx";

/// Configuration for the export pass. The defaults are the contract: a
/// 1280x720 landscape canvas, 2x oversampled capture, JPEG at quality 95.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
    /// Pixel-density multiplier for capture quality.
    pub oversample: u32,
    pub jpeg_quality: u32,
    pub timeout_ms: u64,
    pub browser_path: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: layout::CANVAS_WIDTH,
            height: layout::CANVAS_HEIGHT,
            oversample: 2,
            jpeg_quality: 95,
            timeout_ms: 30000, // 30 seconds
            browser_path: None,
        }
    }
}

/// Single-flight guard over the export slot in the viewer state. Acquiring
/// fails while another export is running; the slot is released on drop, so
/// `export_status` returns to idle on success, failure and unwind alike.
pub struct ExportGuard {
    state: Arc<Mutex<ViewerState>>,
}

impl ExportGuard {
    pub fn acquire(state: &Arc<Mutex<ViewerState>>) -> Result<Self> {
        if !state.lock().try_begin_export() {
            return Err(DeckError::ExportInFlight);
        }
        Ok(Self {
            state: Arc::clone(state),
        })
    }
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        self.state.lock().finish_export();
    }
}

/// Export the whole catalog as one multi-page PPTX, one page per slide in
/// catalog order, written to `output_file`. At most one export runs at a
/// time; a concurrent call fails fast with `ExportInFlight` and leaves the
/// running export untouched.
pub fn export_deck(
    slides: &[SlideRecord],
    state: &Arc<Mutex<ViewerState>>,
    config: &ExportConfig,
    output_file: &Path,
) -> Result<PathBuf> {
    if slides.is_empty() {
        return Err(DeckError::ValidationError("catalog is empty".to_string()));
    }

    let _guard = ExportGuard::acquire(state)?;
    info!("Exporting {} slides to {:?}", slides.len(), output_file);

    let staging_dir = env::temp_dir().join(format!("pitchdeck-export-{}", uuid::Uuid::new_v4()));
    utils::ensure_directory_exists(&staging_dir)?;

    let result = run_pipeline(slides, config, &staging_dir, output_file);

    // Best-effort cleanup of the staging directory either way.
    if let Err(e) = fs::remove_dir_all(&staging_dir) {
        warn!("Failed to remove staging dir {:?}: {}", staging_dir, e);
    }

    result
}

fn run_pipeline(
    slides: &[SlideRecord],
    config: &ExportConfig,
    staging_dir: &Path,
    output_file: &Path,
) -> Result<PathBuf> {
    // Prefetch background illustrations so the capture pass does not depend
    // on the image service. Failures degrade to backdrop-only slides.
    let backgrounds = prefetch_backgrounds(slides, staging_dir);

    // Write the static export page: every slide as a body > div at canvas
    // size, backgrounds referenced relative to the staging dir.
    let page = layout::static_page(slides, config.oversample, |seed| {
        backgrounds.get(seed).cloned()
    });
    let html_path = staging_dir.join("deck.html");
    fs::write(&html_path, page)?;

    capture_pages(&html_path, staging_dir, slides.len(), config)?;

    pptx::generate_pptx(staging_dir, output_file, &PptxConfig::default())?;
    Ok(output_file.to_path_buf())
}

/// Fetch each distinct background image into the staging directory and map
/// its seed to a staging-relative file name. Seeds whose fetch fails are
/// simply absent from the map.
fn prefetch_backgrounds(slides: &[SlideRecord], staging_dir: &Path) -> HashMap<String, String> {
    let client = match Client::builder().timeout(Duration::from_secs(10)).build() {
        Ok(client) => client,
        Err(e) => {
            warn!("Failed to build HTTP client, skipping backgrounds: {}", e);
            return HashMap::new();
        }
    };

    let mut resolved = HashMap::new();
    for slide in slides {
        if resolved.contains_key(slide.image_seed) {
            continue;
        }
        match fetch_background(&client, slide.image_seed) {
            Some(bytes) => {
                let file_name = format!("bg_{}.jpg", slide.image_seed);
                match fs::write(staging_dir.join(&file_name), bytes) {
                    Ok(()) => {
                        resolved.insert(slide.image_seed.to_string(), file_name);
                    }
                    Err(e) => warn!(
                        "Failed to stage background for seed {}: {}",
                        slide.image_seed, e
                    ),
                }
            }
            None => warn!(
                "Background for seed {} unavailable, rendering without it",
                slide.image_seed
            ),
        }
    }
    resolved
}

/// Fetch one background with up to 3 attempts and exponential backoff.
fn fetch_background(client: &Client, seed: &str) -> Option<Vec<u8>> {
    let url = layout::background_url(seed);
    let mut retry_delay = 1000; // Start with 1 second

    for attempt in 1..=3 {
        match client.get(&url).send() {
            Ok(response) if response.status().is_success() => {
                match response.bytes() {
                    Ok(bytes) => return Some(bytes.to_vec()),
                    Err(e) => info!("Failed to read background body: {}", e),
                }
            }
            Ok(response) => info!(
                "Background fetch for seed {} returned HTTP {}",
                seed,
                response.status()
            ),
            Err(e) => info!("Background fetch for seed {} failed: {}", seed, e),
        }

        if attempt < 3 {
            info!(
                "Fetch attempt {} failed, retrying in {} ms",
                attempt, retry_delay
            );
            std::thread::sleep(Duration::from_millis(retry_delay));
            retry_delay *= 2; // Exponential backoff
        }
    }

    None
}

/// Capture one JPEG per slide from the static page, strictly in order. The
/// rasterizer holds shared rendering context, so page i+1 is not shown until
/// page i has been captured and encoded.
fn capture_pages(
    html_path: &Path,
    output_dir: &Path,
    slide_count: usize,
    config: &ExportConfig,
) -> Result<Vec<PathBuf>> {
    let mut launch_options_builder = LaunchOptionsBuilder::default();

    // The window is opened at oversampled size; the page zooms each slide to
    // fill it, which is what gives the capture its extra pixel density.
    let scale = config.oversample.max(1);
    launch_options_builder.window_size(Some((config.width * scale, config.height * scale)));
    launch_options_builder.headless(true);

    if let Some(browser_path) = &config.browser_path {
        launch_options_builder.path(Some(browser_path.into()));
    } else if let Ok(path) = env::var("BROWSER_PATH") {
        if !path.is_empty() {
            launch_options_builder.path(Some(path.into()));
        }
    }

    let launch_options = launch_options_builder
        .build()
        .map_err(|e| DeckError::BrowserError {
            message: format!("Failed to build browser options: {:?}", e),
            source: None,
        })?;

    info!("Launching headless browser");
    let browser = Browser::new(launch_options).map_err(|e| DeckError::BrowserError {
        message: format!("Failed to launch browser: {}", e),
        source: None,
    })?;

    let html_path_abs = fs::canonicalize(html_path)?;
    let url = format!("file://{}", html_path_abs.to_string_lossy());
    info!("Opening export page at {}", url);

    let tab = browser.new_tab().map_err(|e| DeckError::BrowserError {
        message: format!("Failed to create new tab: {}", e),
        source: None,
    })?;

    tab.navigate_to(&url).map_err(|e| DeckError::BrowserError {
        message: format!("Failed to navigate to export page: {}", e),
        source: None,
    })?;

    tab.wait_until_navigated()
        .map_err(|e| DeckError::BrowserError {
            message: format!("Navigation failed: {}", e),
            source: None,
        })?;

    tab.wait_for_element_with_custom_timeout("body", Duration::from_millis(config.timeout_ms))
        .map_err(|e| DeckError::BrowserError {
            message: format!("Failed to wait for body element: {}", e),
            source: None,
        })?;

    // Additional wait to ensure local resources are painted
    std::thread::sleep(Duration::from_millis(500));

    // Hide all pages, then show them one at a time for capture.
    show_only_slide(&tab, 0)?;

    info!("Rendering {} pages", slide_count);
    let start_time = Instant::now();
    let mut output_files = Vec::with_capacity(slide_count);

    for i in 0..slide_count {
        let page_num = i + 1;
        let output_file = output_dir.join(format!("page_{:04}.jpg", page_num));
        info!("Capturing page {}/{}", page_num, slide_count);

        let screenshot_data = tab
            .capture_screenshot(
                headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption::Jpeg,
                Some(config.jpeg_quality),
                None,
                true,
            )
            .map_err(|e| {
                DeckError::ScreenshotError(format!("page {} capture failed: {}", page_num, e))
            })?;

        fs::write(&output_file, &screenshot_data)?;
        output_files.push(output_file);

        if i + 1 < slide_count {
            show_only_slide(&tab, i + 1)?;
            // Let the layout settle before the next capture.
            std::thread::sleep(Duration::from_millis(100));
        }
    }

    info!(
        "Capture complete: {} pages in {:.2} seconds",
        output_files.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(output_files)
}

fn show_only_slide(tab: &headless_chrome::Tab, index: usize) -> Result<()> {
    let js = format!(
        r#"
        var pages = document.querySelectorAll('body > div');
        for (var i = 0; i < pages.length; i++) {{
            pages[i].style.display = i === {} ? '' : 'none';
        }}
        true;
    "#,
        index
    );

    tab.evaluate(&js, false)
        .map(|_| ())
        .map_err(|e| DeckError::BrowserError {
            message: format!("Failed to show page {}: {}", index + 1, e),
            source: None,
        })
}
