use super::*;
use crate::viewer::{progress_label, progress_ratio};
use std::time::{Duration, Instant};

#[test]
fn test_catalog_is_valid() {
    let slides = catalog();
    assert_eq!(slides.len(), 12);
    assert!(catalog::validate(slides).is_ok());
}

#[test]
fn test_catalog_ids_match_position() {
    for (i, slide) in catalog().iter().enumerate() {
        assert_eq!(slide.id as usize, i + 1);
    }
}

#[test]
fn test_validate_rejects_empty_catalog() {
    assert!(catalog::validate(&[]).is_err());
}

#[test]
fn test_validate_rejects_gapped_ids() {
    let mut slides = catalog().to_vec();
    slides[3].id = 9;
    assert!(catalog::validate(&slides).is_err());
}

#[test]
fn test_next_clamps_at_last_slide() {
    let mut state = ViewerState::new(12);

    // Pressing right 11 times lands on the last slide.
    for _ in 0..11 {
        assert!(state.next());
    }
    assert_eq!(state.current_index(), 11);

    // A 12th press is a no-op.
    assert!(!state.next());
    assert_eq!(state.current_index(), 11);

    // One step back returns to index 10.
    assert!(state.previous());
    assert_eq!(state.current_index(), 10);
}

#[test]
fn test_previous_clamps_at_first_slide() {
    let mut state = ViewerState::new(3);
    assert!(!state.previous());
    assert_eq!(state.current_index(), 0);
    assert!(!state.previous());
    assert_eq!(state.current_index(), 0);
}

#[test]
fn test_jump_clamps_to_range() {
    let mut state = ViewerState::new(5);
    assert!(state.jump(100));
    assert_eq!(state.current_index(), 4);
    assert!(state.jump(0));
    assert_eq!(state.current_index(), 0);
    assert!(!state.jump(0));
}

#[test]
fn test_nav_command_key_bindings() {
    assert_eq!(NavCommand::from_key("ArrowRight"), Some(NavCommand::Next));
    assert_eq!(NavCommand::from_key("Space"), Some(NavCommand::Next));
    assert_eq!(NavCommand::from_key(" "), Some(NavCommand::Next));
    assert_eq!(NavCommand::from_key("ArrowLeft"), Some(NavCommand::Previous));
    assert_eq!(NavCommand::from_key("Enter"), None);
    assert_eq!(NavCommand::from_key("a"), None);
    assert_eq!(NavCommand::from_key("ArrowUp"), None);
}

#[test]
fn test_progress_indicator() {
    assert_eq!(progress_label(0, 12), "1 / 12");
    assert_eq!(progress_label(11, 12), "12 / 12");
    assert!((progress_ratio(11, 12) - 1.0).abs() < f64::EPSILON);
    assert!((progress_ratio(2, 12) - 0.25).abs() < f64::EPSILON);
}

#[test]
fn test_export_status_single_flight() {
    let mut state = ViewerState::new(12);
    assert_eq!(state.export_status(), ExportStatus::Idle);

    assert!(state.try_begin_export());
    assert_eq!(state.export_status(), ExportStatus::Exporting);

    // The slot is taken; a second request is rejected.
    assert!(!state.try_begin_export());

    state.finish_export();
    assert_eq!(state.export_status(), ExportStatus::Idle);
    assert!(state.try_begin_export());
}

#[test]
fn test_copy_ack_expires_after_delay() {
    let mut state = ViewerState::new(12);
    let now = Instant::now();

    let generation = state.acknowledge_copy(now);
    assert!(state.is_copy_acknowledged(now));
    assert!(state.is_copy_acknowledged(now + Duration::from_millis(1999)));
    assert!(!state.is_copy_acknowledged(now + Duration::from_millis(2000)));

    state.expire_copy_ack(generation);
    assert!(!state.is_copy_acknowledged(now));
}

#[test]
fn test_copy_ack_cleared_by_slide_change() {
    let mut state = ViewerState::new(12);
    let now = Instant::now();

    let generation = state.acknowledge_copy(now);
    state.next();

    // The ack belonged to the previous slide.
    assert!(!state.is_copy_acknowledged(now));

    // The expiry timer for the old slide must not clear a fresh ack.
    let fresh = state.acknowledge_copy(now);
    assert_ne!(generation, fresh);
    state.expire_copy_ack(generation);
    assert!(state.is_copy_acknowledged(now));
}

#[test]
fn test_layout_kind_lookup() {
    assert_eq!(LayoutKind::for_slide(3), LayoutKind::AssetFlow);
    assert_eq!(LayoutKind::for_slide(7), LayoutKind::LaborLanes);
    for id in [1, 2, 4, 5, 6, 8, 9, 10, 11, 12] {
        assert_eq!(LayoutKind::for_slide(id), LayoutKind::Default);
    }
}

#[test]
fn test_icon_lookup_falls_back_to_default() {
    assert!(icons::is_registered("Handshake"));
    assert!(!icons::is_registered("NoSuchIcon"));
    assert_eq!(icons::lookup("NoSuchIcon"), icons::lookup(icons::DEFAULT_ICON));
}

#[test]
fn test_every_catalog_icon_resolves() {
    for slide in catalog() {
        assert!(
            icons::is_registered(slide.icon_name),
            "slide {} icon {} is not registered",
            slide.id,
            slide.icon_name
        );
    }
}

#[test]
fn test_render_every_slide_in_both_modes() {
    for slide in catalog() {
        for mode in [RenderMode::Interactive, RenderMode::Static] {
            let html = render_slide(slide, mode);
            assert!(html.contains("slide-label"), "slide {} missing label", slide.id);
            for bullet in slide.bullets {
                // Bullets may contain markup-significant characters.
                let escaped = quick_xml::escape::escape(*bullet);
                assert!(html.contains(escaped.as_ref()));
            }
        }
    }
}

#[test]
fn test_render_copy_affordance_only_when_interactive() {
    let slide = &catalog()[0];
    let interactive = render_slide(slide, RenderMode::Interactive);
    let fixed = render_slide(slide, RenderMode::Static);
    assert!(interactive.contains("copy-button"));
    assert!(!fixed.contains("copy-button"));
    assert!(interactive.contains("enter-left"));
    assert!(!fixed.contains("enter-left"));
}

#[test]
fn test_render_survives_missing_background() {
    for slide in catalog() {
        let html = layout::render_slide_with_background(slide, RenderMode::Static, None);
        assert!(html.contains("backdrop"));
        assert!(!html.contains("<img"));
    }
}

#[test]
fn test_render_with_unknown_icon_uses_default() {
    let mut slide = catalog()[0].clone();
    slide.icon_name = "DefinitelyNotAnIcon";
    let html = render_slide(&slide, RenderMode::Static);
    assert!(html.contains(icons::lookup(icons::DEFAULT_ICON)));
}

#[test]
fn test_background_url_is_deterministic() {
    let a = layout::background_url("expansion");
    let b = layout::background_url("expansion");
    assert_eq!(a, b);
    assert!(a.contains("/seed/expansion/800/600"));
    // The grayscale flag is bare, not a key=value pair.
    assert!(a.ends_with("?grayscale&blur=2"));
    assert_ne!(a, layout::background_url("success"));
}

#[test]
fn test_summarize_format() {
    let slide = &catalog()[0];
    let text = summarize(slide);

    assert!(text.starts_with("Slide 1: The 50-State Digital Asset Expansion"));
    assert!(text.contains(&format!("Visual Blueprint: {}", slide.visual_blueprint)));
    assert!(text.contains("Key Bullets:"));
    assert!(text.ends_with(&format!("Power Line: \"{}\"", slide.power_line)));
}

#[test]
fn test_summarize_keeps_bullet_order() {
    for slide in catalog() {
        let text = summarize(slide);
        let mut cursor = 0;
        for bullet in slide.bullets {
            let line = format!("- {}", bullet);
            let pos = text[cursor..]
                .find(&line)
                .unwrap_or_else(|| panic!("slide {} missing bullet {:?}", slide.id, bullet));
            cursor += pos + line.len();
        }
    }
}

#[test]
fn test_interactive_page_contains_every_slide() {
    let html = layout::interactive_page(catalog(), 8081);
    assert_eq!(html.matches("class=\"slide\"").count(), 12);
    assert!(html.contains("8081"));
    assert!(html.contains("1 / 12"));
    // Only the first slide starts visible.
    assert_eq!(html.matches("style=\"display:none\"").count(), 11);
}

#[test]
fn test_static_page_stacks_all_slides() {
    let html = layout::static_page(catalog(), 2, |_| None);
    assert_eq!(html.matches("<div class=\"print-slide\">").count(), 12);
    assert!(html.contains("zoom:2"));
    // No interactive affordances on the export page.
    assert!(!html.contains("<button class=\"copy-button\""));
}
