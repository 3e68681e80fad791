// ABOUTME: Slide renderer for the pitchdeck application
// ABOUTME: Maps slide records to HTML layouts for the viewer and the export pass

use crate::catalog::SlideRecord;
use crate::icons;
use log::warn;
use quick_xml::escape::escape;
use url::Url;

/// Fixed export canvas, landscape.
pub const CANVAS_WIDTH: u32 = 1280;
pub const CANVAS_HEIGHT: u32 = 720;

/// Canvas background fill, used behind every slide and as the rasterization
/// backdrop (slate-950).
pub const CANVAS_BACKGROUND: &str = "#020617";

const IMAGE_SERVICE: &str = "https://picsum.photos";

/// Rendering pass for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// On-screen display: entrance transitions and the copy affordance.
    Interactive,
    /// Export display: no motion, fixed canvas size, no controls.
    Static,
}

/// Visual layout for a slide, resolved once per slide by id. Most slides use
/// the default centered-icon layout; two slides of the reference deck carry
/// bespoke diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Centered icon over the generated background image.
    Default,
    /// Slide 3: Site -> Rank -> Lead -> Partner flow diagram.
    AssetFlow,
    /// Slide 7: tech lane / growth lane split.
    LaborLanes,
}

impl LayoutKind {
    pub fn for_slide(id: u32) -> Self {
        match id {
            3 => LayoutKind::AssetFlow,
            7 => LayoutKind::LaborLanes,
            _ => LayoutKind::Default,
        }
    }
}

/// Deterministic background illustration URL for a seed: the image service
/// returns the same image for the same seed at a fixed aspect ratio.
pub fn background_url(seed: &str) -> String {
    let base = format!("{}/seed/{}/800/600", IMAGE_SERVICE, seed);
    match Url::parse(&base) {
        Ok(mut url) => {
            // `grayscale` is a bare flag to the image service, not a
            // key=value pair.
            url.set_query(Some("grayscale&blur=2"));
            url.to_string()
        }
        Err(e) => {
            // Seeds in the catalog are plain tokens, so this should not
            // happen; fall back to the raw string rather than failing a render.
            warn!("Failed to build background URL for seed {}: {}", seed, e);
            base
        }
    }
}

/// Render one slide to an HTML fragment. Pure with respect to the record and
/// infallible: unknown icons fall back to the default glyph and a missing
/// background simply leaves the backdrop bare.
pub fn render_slide(slide: &SlideRecord, mode: RenderMode) -> String {
    render_slide_with_background(slide, mode, Some(&background_url(slide.image_seed)))
}

/// Render with an explicit background image source (`None` renders
/// backdrop-only). The export pipeline passes prefetched local files here so
/// rasterization does not depend on the image service being reachable.
pub fn render_slide_with_background(
    slide: &SlideRecord,
    mode: RenderMode,
    background_src: Option<&str>,
) -> String {
    let animated = mode == RenderMode::Interactive;
    let mut html = String::with_capacity(4096);

    html.push_str("<div class=\"slide-body\">");

    // Left column: label, title, bullets, power line.
    html.push_str(&format!(
        "<div class=\"content{}\">",
        if animated { " enter-left" } else { "" }
    ));
    html.push_str(&format!(
        "<span class=\"slide-label\">Slide {:02}</span>",
        slide.id
    ));
    html.push_str(&format!("<h1>{}</h1>", escape(slide.title)));
    if let Some(subtitle) = slide.subtitle {
        html.push_str(&format!("<p class=\"subtitle\">{}</p>", escape(subtitle)));
    }
    html.push_str("<div class=\"bullets\">");
    for (idx, bullet) in slide.bullets.iter().enumerate() {
        let style = if animated {
            // Staggered entrance, top bullet first.
            format!(" style=\"animation-delay: {}ms\"", 300 + idx * 100)
        } else {
            String::new()
        };
        html.push_str(&format!(
            "<div class=\"bullet{}\"{}><span class=\"dot\"></span><p>{}</p></div>",
            if animated { " enter-up" } else { "" },
            style,
            escape(*bullet)
        ));
    }
    html.push_str("</div>");
    html.push_str(&format!(
        "<div class=\"power-line{}\"><p>&quot;{}&quot;</p></div>",
        if animated { " enter-up" } else { "" },
        escape(slide.power_line)
    ));
    html.push_str("</div>");

    // Right column: the visual, plus the copy affordance when interactive.
    html.push_str(&format!(
        "<div class=\"visual{}\">",
        if animated { " enter-scale" } else { "" }
    ));
    html.push_str(&render_visual(slide, background_src));
    if animated {
        html.push_str(&format!(
            concat!(
                "<button class=\"copy-button\" data-id=\"{}\" title=\"Copy Slide Content\">",
                "<span class=\"icon-copy\">{}</span>",
                "<span class=\"icon-check\">{}</span>",
                "</button>"
            ),
            slide.id,
            icons::svg_tag("Copy", 20, "glyph"),
            icons::svg_tag("Check", 20, "glyph ok"),
        ));
    }
    html.push_str("</div>");

    html.push_str("</div>");
    html
}

fn background_img(background_src: Option<&str>, class: &str) -> String {
    match background_src {
        Some(src) => format!(
            "<div class=\"backdrop\"><img class=\"{}\" src=\"{}\" alt=\"\"></div>",
            class,
            escape(src)
        ),
        // Degrade gracefully: keep the backdrop container so the layout
        // holds, with no image inside it.
        None => "<div class=\"backdrop\"></div>".to_string(),
    }
}

fn render_visual(slide: &SlideRecord, background_src: Option<&str>) -> String {
    match LayoutKind::for_slide(slide.id) {
        LayoutKind::AssetFlow => render_asset_flow(background_src),
        LayoutKind::LaborLanes => render_labor_lanes(background_src),
        LayoutKind::Default => render_default_visual(slide, background_src),
    }
}

fn render_default_visual(slide: &SlideRecord, background_src: Option<&str>) -> String {
    format!(
        concat!(
            "<div class=\"panel default-visual\">",
            "{backdrop}",
            "<div class=\"icon-badge\">{icon}</div>",
            "</div>"
        ),
        backdrop = background_img(background_src, "dim-20"),
        icon = icons::svg_tag(slide.icon_name, 80, "hero-glyph"),
    )
}

fn render_asset_flow(background_src: Option<&str>) -> String {
    let steps = [
        ("Globe", "Site"),
        ("TrendingUp", "Rank"),
        ("User", "Lead"),
        ("Handshake", "Partner"),
    ];

    let mut html = String::from("<div class=\"panel asset-flow\">");
    html.push_str(&background_img(background_src, "dim-10"));
    html.push_str("<div class=\"flow-steps\">");
    for (i, (icon, label)) in steps.iter().enumerate() {
        html.push_str(&format!(
            concat!(
                "<div class=\"flow-step\">",
                "<div class=\"flow-box\">{}</div>",
                "<span class=\"flow-label\">{}</span>",
                "</div>"
            ),
            icons::svg_tag(icon, 32, "flow-glyph"),
            label
        ));
        if i + 1 < steps.len() {
            html.push_str(&format!(
                "<span class=\"flow-arrow\">{}</span>",
                icons::svg_tag("ArrowRight", 24, "glyph")
            ));
        }
    }
    html.push_str("</div></div>");
    html
}

fn render_labor_lanes(background_src: Option<&str>) -> String {
    let tech = [("Code", "Code"), ("Search", "SEO"), ("Server", "Server")];
    let growth = [("Phone", "Phone"), ("Users", "CRM"), ("Handshake", "Handshake")];

    let lane = |class: &str, heading: &str, items: &[(&str, &str)]| {
        let mut out = format!(
            "<div class=\"lane {}\"><div class=\"lane-heading\">{}</div>",
            class, heading
        );
        for (icon, label) in items {
            out.push_str(&format!(
                "<div class=\"lane-item\">{}<span>{}</span></div>",
                icons::svg_tag(icon, 20, "glyph"),
                label
            ));
        }
        out.push_str("</div>");
        out
    };

    format!(
        "<div class=\"panel labor-lanes\">{}{}{}</div>",
        background_img(background_src, "dim-10"),
        lane("lane-tech", "Tech Lane", &tech),
        lane("lane-growth", "Growth Lane", &growth),
    )
}

/// Build the interactive viewer page: every slide rendered as a hidden
/// `div.slide` under the deck container, with the header, nav controls and
/// the websocket client script wired to the given control port.
pub fn interactive_page(slides: &[SlideRecord], ws_port: u16) -> String {
    let mut html = String::with_capacity(64 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("<title>Vincent Creation Proposal</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLESHEET));
    html.push_str("</head>\n<body class=\"viewer\">\n");

    // Header: brand, progress indicator, export trigger.
    html.push_str("<header class=\"top-bar\">");
    html.push_str(&format!(
        "<div class=\"brand\">{}<span>Vincent Creation Proposal</span></div>",
        icons::svg_tag("Presentation", 18, "glyph")
    ));
    html.push_str("<div class=\"status\">");
    html.push_str(&format!(
        "<span id=\"progress-label\" class=\"progress-label\">{}</span>",
        crate::viewer::progress_label(0, slides.len())
    ));
    html.push_str(
        "<div class=\"progress-track\"><div id=\"progress-fill\" class=\"progress-fill\"></div></div>",
    );
    html.push_str(&format!(
        concat!(
            "<button id=\"export-button\" class=\"export-button\">",
            "{}<span id=\"export-label\">PPTX</span></button>"
        ),
        icons::svg_tag("Download", 16, "glyph")
    ));
    html.push_str("</div></header>\n");

    // Deck: one div per slide, only the current one is shown.
    html.push_str("<main class=\"deck\">\n");
    for (i, slide) in slides.iter().enumerate() {
        let display = if i == 0 { "" } else { " style=\"display:none\"" };
        html.push_str(&format!(
            "<div class=\"slide\" data-index=\"{}\"{}>{}</div>\n",
            i,
            display,
            render_slide(slide, RenderMode::Interactive)
        ));
    }
    html.push_str("</main>\n");

    // Prev/next controls and the keyboard hint.
    html.push_str(concat!(
        "<nav class=\"nav-controls\">",
        "<button id=\"prev-button\" disabled>&lsaquo;</button>",
        "<button id=\"next-button\">&rsaquo;</button>",
        "</nav>\n",
        "<div class=\"hint\">Use Arrow Keys to Navigate</div>\n",
    ));

    html.push_str(&format!(
        "<script>{}</script>\n",
        VIEWER_SCRIPT.replace("__WS_PORT__", &ws_port.to_string())
    ));
    html.push_str("</body>\n</html>");
    html
}

/// Build the export page: every slide as a direct `body > div` at the fixed
/// canvas size so the rasterizer can show and capture them one at a time.
/// `resolve_background` maps an image seed to an embeddable source (a
/// page-relative file); returning `None` renders the slide backdrop-only.
pub fn static_page<F>(slides: &[SlideRecord], oversample: u32, resolve_background: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut html = String::with_capacity(64 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<title>Vincent Creation Proposal</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLESHEET));
    // Oversampling: the browser window is opened at scale x canvas size and
    // each slide is zoomed to fill it, giving higher-density captures.
    html.push_str(&format!(
        "<style>body>div.print-slide{{zoom:{};}}</style>\n",
        oversample.max(1)
    ));
    html.push_str("</head>\n<body class=\"print\">\n");

    for slide in slides {
        let background = resolve_background(slide.image_seed);
        html.push_str("<div class=\"print-slide\">");
        html.push_str(&render_slide_with_background(
            slide,
            RenderMode::Static,
            background.as_deref(),
        ));
        html.push_str("</div>\n");
    }

    html.push_str("</body>\n</html>");
    html
}

static STYLESHEET: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { height: 100%; }
body {
  background: #020617;
  color: #fff;
  font-family: 'Helvetica Neue', Arial, sans-serif;
  overflow: hidden;
}
body.print { overflow: visible; height: auto; }

.top-bar {
  position: fixed; top: 0; left: 0; width: 100%; z-index: 50;
  padding: 24px; display: flex; justify-content: space-between; align-items: center;
}
.brand { display: flex; align-items: center; gap: 12px; color: #94a3b8; font-size: 14px; }
.brand .glyph { color: #818cf8; }
.status { display: flex; align-items: center; gap: 16px; }
.progress-label { font-family: monospace; font-size: 13px; color: #64748b; }
.progress-track { width: 128px; height: 4px; background: #1e293b; border-radius: 2px; overflow: hidden; }
.progress-fill {
  height: 100%; background: #6366f1; border-radius: 2px;
  transition: width 0.3s ease; width: 0;
}
.export-button {
  display: flex; align-items: center; gap: 8px; padding: 8px 16px;
  background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1);
  border-radius: 8px; color: #fff; font-size: 13px; cursor: pointer;
}
.export-button:disabled { opacity: 0.5; cursor: not-allowed; }

.deck { height: 100%; width: 100%; position: relative; }
.slide { width: 100%; height: 100%; padding: 64px; display: flex; align-items: center; justify-content: center; }

.print-slide {
  width: 1280px; height: 720px; background: #020617; overflow: hidden;
  padding: 64px; display: flex; align-items: center; justify-content: center;
  border-bottom: 1px solid #1e293b;
}

.slide-body {
  max-width: 1024px; width: 100%; display: grid;
  grid-template-columns: 1fr 1fr; gap: 48px; align-items: center;
}
.content { display: flex; flex-direction: column; gap: 28px; }
.slide-label {
  color: #818cf8; font-family: monospace; font-size: 13px;
  letter-spacing: 0.2em; text-transform: uppercase;
}
.content h1 { font-size: 42px; line-height: 1.15; font-weight: 700; }
.subtitle { font-size: 19px; color: #94a3b8; font-weight: 300; margin-top: 8px; }
.bullets { display: flex; flex-direction: column; gap: 14px; }
.bullet { display: flex; align-items: flex-start; gap: 12px; }
.bullet .dot {
  width: 6px; height: 6px; border-radius: 50%; background: #34d399;
  margin-top: 9px; flex-shrink: 0;
}
.bullet p { font-size: 17px; color: #cbd5e1; line-height: 1.6; }
.power-line { padding-top: 24px; border-top: 1px solid rgba(255,255,255,0.1); }
.power-line p { font-size: 22px; font-family: Georgia, serif; font-style: italic; color: rgba(255,255,255,0.9); }

.visual { position: relative; aspect-ratio: 4 / 3; }
.panel {
  position: relative; width: 100%; height: 100%; overflow: hidden;
  background: rgba(15,23,42,0.8); border: 1px solid rgba(255,255,255,0.1);
  border-radius: 16px; display: flex; align-items: center; justify-content: center;
}
.backdrop { position: absolute; inset: 0; }
.backdrop img { width: 100%; height: 100%; object-fit: cover; }
.backdrop img.dim-20 { opacity: 0.2; }
.backdrop img.dim-10 { opacity: 0.1; }
.icon-badge {
  position: relative; z-index: 10; padding: 32px; border-radius: 50%;
  background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1);
}
.hero-glyph { color: #818cf8; display: block; }

.flow-steps { position: relative; z-index: 10; display: flex; align-items: center; gap: 14px; }
.flow-step { display: flex; flex-direction: column; align-items: center; gap: 10px; }
.flow-box {
  width: 64px; height: 64px; border-radius: 16px; display: flex;
  align-items: center; justify-content: center;
  background: rgba(99,102,241,0.2); border: 1px solid rgba(129,140,248,0.3);
}
.flow-glyph { color: #a5b4fc; }
.flow-label {
  font-family: monospace; font-size: 12px; text-transform: uppercase;
  letter-spacing: 0.1em; color: #c7d2fe; font-weight: 600;
}
.flow-arrow { color: rgba(100,116,139,0.5); display: flex; }

.labor-lanes { gap: 14px; padding: 16px; align-items: stretch; }
.lane {
  position: relative; z-index: 10; flex: 1; border-radius: 12px; padding: 16px;
  display: flex; flex-direction: column; align-items: center; gap: 12px;
}
.lane-tech { background: rgba(49,46,129,0.4); border: 1px solid rgba(99,102,241,0.3); }
.lane-growth { background: rgba(6,78,59,0.4); border: 1px solid rgba(16,185,129,0.3); }
.lane-heading {
  font-family: monospace; font-size: 11px; text-transform: uppercase;
  letter-spacing: 0.2em; margin-bottom: 4px;
}
.lane-tech .lane-heading, .lane-tech .glyph { color: #818cf8; }
.lane-growth .lane-heading, .lane-growth .glyph { color: #34d399; }
.lane-item {
  width: 100%; display: flex; align-items: center; gap: 10px;
  padding: 10px; border-radius: 8px; font-size: 13px;
  background: rgba(2,6,23,0.6); border: 1px solid rgba(255,255,255,0.08);
}
.lane-tech .lane-item span { color: #c7d2fe; }
.lane-growth .lane-item span { color: #a7f3d0; }

.copy-button {
  position: absolute; top: 16px; right: 16px; z-index: 20; padding: 8px;
  color: #64748b; background: rgba(0,0,0,0.2); border: none; border-radius: 8px;
  cursor: pointer;
}
.copy-button:hover { color: #fff; background: rgba(255,255,255,0.1); }
.copy-button .icon-check { display: none; }
.copy-button.copied .icon-copy { display: none; }
.copy-button.copied .icon-check { display: inline; }
.copy-button .ok { color: #34d399; }

.nav-controls {
  position: fixed; bottom: 32px; left: 50%; transform: translateX(-50%);
  display: flex; gap: 16px; z-index: 50;
}
.nav-controls button {
  width: 48px; height: 48px; border-radius: 50%; font-size: 24px; color: #fff;
  background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1);
  cursor: pointer;
}
.nav-controls button:disabled { opacity: 0.3; cursor: not-allowed; }
.hint {
  position: fixed; bottom: 24px; right: 24px; font-family: monospace;
  font-size: 11px; color: #475569;
}

@keyframes enter-left { from { opacity: 0; transform: translateX(-50px); } to { opacity: 1; transform: none; } }
@keyframes enter-up { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@keyframes enter-scale { from { opacity: 0; transform: scale(0.9); } to { opacity: 1; transform: none; } }
.enter-left { animation: enter-left 0.6s ease 0.1s backwards; }
.enter-up { animation: enter-up 0.4s ease 0.3s backwards; }
.enter-scale { animation: enter-scale 0.6s ease 0.2s backwards; }
body.print .enter-left, body.print .enter-up, body.print .enter-scale { animation: none; }
"#;

static VIEWER_SCRIPT: &str = r#"
(function () {
  var slides = document.querySelectorAll('.deck > .slide');
  var total = slides.length;
  var current = 0;
  var label = document.getElementById('progress-label');
  var fill = document.getElementById('progress-fill');
  var prevBtn = document.getElementById('prev-button');
  var nextBtn = document.getElementById('next-button');
  var exportBtn = document.getElementById('export-button');
  var exportLabel = document.getElementById('export-label');

  var ws = new WebSocket('ws://' + location.hostname + ':__WS_PORT__');

  function showSlide(index) {
    for (var i = 0; i < total; i++) {
      slides[i].style.display = i === index ? '' : 'none';
    }
    current = index;
    label.textContent = (index + 1) + ' / ' + total;
    fill.style.width = (((index + 1) / total) * 100) + '%';
    prevBtn.disabled = index === 0;
    nextBtn.disabled = index === total - 1;
    setCopied(false);
  }

  function setCopied(on) {
    var button = slides[current].querySelector('.copy-button');
    if (button) button.classList.toggle('copied', on);
  }

  ws.onmessage = function (event) {
    var parts = event.data.split(' ');
    if (parts[0] === 'slide') {
      showSlide(parseInt(parts[1], 10));
    } else if (parts[0] === 'copied') {
      setCopied(parts[1] === '1');
    } else if (parts[0] === 'export') {
      var busy = parts[1] === 'busy';
      exportBtn.disabled = busy;
      exportLabel.textContent = busy ? 'Generating…' : 'PPTX';
      if (parts[1] === 'failed') {
        alert('Failed to export the deck. Please try again.');
      }
    }
  };

  document.addEventListener('keydown', function (e) {
    var key = e.key === ' ' ? 'Space' : e.key;
    ws.send('key ' + key);
  });

  prevBtn.addEventListener('click', function () { ws.send('prev'); });
  nextBtn.addEventListener('click', function () { ws.send('next'); });
  exportBtn.addEventListener('click', function () { ws.send('export'); });
  document.addEventListener('click', function (e) {
    var button = e.target.closest && e.target.closest('.copy-button');
    if (button) ws.send('copy');
  });

  showSlide(0);
  fill.style.width = ((1 / total) * 100) + '%';
})();
"#;
