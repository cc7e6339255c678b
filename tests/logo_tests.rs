// Host-side tests for logo sampling and dot layout.

use folio_core::constants::{ACCENT, DEFAULT_GRADIENT};
use folio_core::logo::{include_pixel, sampled_height, MapColor};
use folio_core::{build_dots, ColorSource, DotLayout, FieldError, LogoMap, Rgb, SamplingOptions};
use folio_core::render::dot_color;
use folio_core::{Entity, Field, PointerState, RenderAdapter, RenderError, Scene, Theme, Tuning};
use glam::Vec2;
use std::rc::Rc;

const DARK: [u8; 4] = [10, 10, 10, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn pixels(px: &[[u8; 4]]) -> Vec<u8> {
    px.iter().flatten().copied().collect()
}

fn image_options() -> SamplingOptions {
    SamplingOptions {
        source: ColorSource::Image,
        ..SamplingOptions::default()
    }
}

#[test]
fn silhouette_mode_keeps_dark_opaque_pixels() {
    let options = SamplingOptions::default();
    assert!(include_pixel(DARK, &options));
    assert!(!include_pixel(WHITE, &options));
    assert!(!include_pixel(CLEAR, &options));
    // average brightness, not luma: (255 + 0 + 128) / 3 = 127.67
    assert!(include_pixel([255, 0, 128, 255], &options));
    assert!(include_pixel([128, 128, 128, 128], &options));
}

#[test]
fn image_mode_keeps_every_opaque_pixel() {
    let options = image_options();
    assert!(include_pixel(WHITE, &options));
    assert!(include_pixel(DARK, &options));
    assert!(!include_pixel([255, 255, 255, 127], &options));
}

#[test]
fn sampling_twice_gives_the_same_map() {
    let buf = pixels(&[DARK, WHITE, CLEAR, DARK, DARK, WHITE]);
    let options = SamplingOptions::default();
    let a = LogoMap::from_rgba(&buf, 3, 2, &options).unwrap();
    let b = LogoMap::from_rgba(&buf, 3, 2, &options).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.dots, vec![vec![true, false, false], vec![true, true, false]]);
    assert_eq!(a.dot_count(), 3);
}

#[test]
fn gradient_colors_follow_the_column() {
    let buf = pixels(&[DARK, DARK]);
    let map = LogoMap::from_rgba(&buf, 2, 1, &SamplingOptions::default()).unwrap();
    assert_eq!(map.color(0, 0), Some(DEFAULT_GRADIENT[0]));
    let mid = DEFAULT_GRADIENT[0].lerp(DEFAULT_GRADIENT[1], 0.5);
    assert_eq!(map.color(1, 0), Some(mid));
}

#[test]
fn image_colors_are_kept_per_dot() {
    let buf = pixels(&[[200, 10, 20, 255], CLEAR]);
    let map = LogoMap::from_rgba(&buf, 2, 1, &image_options()).unwrap();
    assert_eq!(map.color(0, 0), Some(Rgb::new(200, 10, 20)));
    assert_eq!(map.color(1, 0), None);
}

#[test]
fn short_buffer_is_rejected() {
    let buf = pixels(&[DARK, DARK, DARK]);
    match LogoMap::from_rgba(&buf, 2, 2, &SamplingOptions::default()) {
        Err(FieldError::PixelBuffer {
            expected, actual, ..
        }) => assert_eq!((expected, actual), (16, 12)),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn map_json_uses_exported_field_names() {
    let buf = pixels(&[DARK, WHITE]);
    let map = LogoMap::from_rgba(&buf, 2, 1, &SamplingOptions::default()).unwrap();
    let json = map.to_json().unwrap();
    assert!(json.contains(r#""gridWidth":2"#));
    assert!(json.contains(r#""dotPositions":[[true,false]]"#));
    assert!(json.contains(r##""colors":[["#3c7cff",""]]"##));
    assert_eq!(LogoMap::from_json(&json).unwrap(), map);
}

#[test]
fn map_json_without_colors_parses() {
    let map = LogoMap::from_json(
        r#"{ "gridWidth": 2, "gridHeight": 1, "dotPositions": [[true, true]], "spacing": 2 }"#,
    )
    .unwrap();
    assert_eq!(map.colors, None);
    assert_eq!(map.color(0, 0), None);
    assert!(LogoMap::from_json("{").is_err());
    let bad_color = r#"{ "gridWidth": 1, "gridHeight": 1, "dotPositions": [[true]], "spacing": 2, "colors": [["nope"]] }"#;
    assert!(LogoMap::from_json(bad_color).is_err());
}

#[test]
fn empty_string_is_a_missing_color() {
    let c: MapColor = serde_json::from_str(r#""""#).unwrap();
    assert_eq!(c, MapColor(None));
}

#[test]
fn dots_sit_on_the_layout_grid() {
    let map = LogoMap {
        grid_width: 3,
        grid_height: 2,
        dots: vec![vec![true, false, true], vec![false, true, false]],
        spacing: 2.0,
        colors: None,
    };
    let layout = DotLayout::for_map(&map, 4.0);
    assert_eq!(layout.gap(), 4.0);
    assert_eq!(layout.cell(), 8.0);
    assert_eq!(layout.canvas_size(&map), Vec2::new(24.0, 16.0));

    let dots = build_dots(&map, &layout, &[]);
    let rests: Vec<Vec2> = dots.iter().map(|d| d.rest()).collect();
    assert_eq!(
        rests,
        vec![Vec2::new(2.0, 2.0), Vec2::new(18.0, 2.0), Vec2::new(10.0, 10.0)]
    );
    assert!(dots.iter().all(|d| d.visual == ACCENT && d.activation == 0.0));
}

#[test]
fn missing_colors_fall_back_to_the_gradient() {
    let map = LogoMap {
        grid_width: 2,
        grid_height: 1,
        dots: vec![vec![true, true]],
        spacing: 2.0,
        colors: Some(vec![vec![MapColor(Some(Rgb::new(1, 2, 3))), MapColor(None)]]),
    };
    let fallback = [Rgb::new(0, 0, 0), Rgb::new(200, 200, 200)];
    let dots = build_dots(&map, &DotLayout::default(), &fallback);
    assert_eq!(dots[0].visual, Rgb::new(1, 2, 3));
    assert_eq!(dots[1].visual, Rgb::new(100, 100, 100));
}

#[test]
fn non_positive_spacing_uses_default() {
    assert_eq!(DotLayout::new(4.0, 0.0), DotLayout::new(4.0, 2.0));
    assert_eq!(DotLayout::new(4.0, -1.0).spacing, 2.0);
}

#[test]
fn sampled_height_keeps_aspect_ratio() {
    assert_eq!(sampled_height(400, 200, 40), 20);
    assert_eq!(sampled_height(300, 100, 40), 13);
    assert_eq!(sampled_height(0, 100, 40), 0);
}

#[test]
fn chosen_spacing_is_stored_in_the_map() {
    let buf = pixels(&[DARK, DARK]);
    let options = SamplingOptions {
        spacing: 3.5,
        ..SamplingOptions::default()
    };
    let map = LogoMap::from_rgba(&buf, 2, 1, &options).unwrap();
    assert_eq!(map.spacing, 3.5);
    assert!(map.to_json().unwrap().contains(r#""spacing":3.5"#));
    assert_eq!(DotLayout::for_map(&map, 4.0).gap(), 7.0);

    let unusable = SamplingOptions {
        spacing: 0.0,
        ..SamplingOptions::default()
    };
    assert_eq!(LogoMap::from_rgba(&buf, 2, 1, &unusable).unwrap().spacing, 2.0);
}

// Collects the fill each dot would be drawn with.
#[derive(Default)]
struct Fills(Vec<Rgb>);

impl RenderAdapter<Rgb> for Fills {
    fn begin_frame(&mut self, _theme: Theme) -> Result<(), RenderError> {
        self.0.clear();
        Ok(())
    }

    fn render(&mut self, entity: &Entity<Rgb>, _theme: Theme) -> Result<(), RenderError> {
        self.0.push(dot_color(entity.visual, entity.activation));
        Ok(())
    }
}

#[test]
fn reset_fades_touched_dots_back_to_gray() {
    let map = LogoMap::from_rgba(&pixels(&[DARK, DARK]), 2, 1, &SamplingOptions::default())
        .unwrap();
    let dots = build_dots(&map, &DotLayout::default(), &DEFAULT_GRADIENT);
    let gray: Vec<Rgb> = dots.iter().map(|d| d.visual.grayscale()).collect();
    let mut scene = Scene::new(
        Field::new(dots, Tuning::default()),
        Fills::default(),
        Rc::new(PointerState::new(100.0)),
        Theme::Light,
    );

    scene.pointer().set_position(Vec2::new(5.0, 3.0));
    for _ in 0..30 {
        scene.frame();
    }
    assert_eq!(scene.adapter().0, vec![map.color(0, 0).unwrap(), map.color(1, 0).unwrap()]);

    scene.pointer().clear();
    scene.reset();
    scene.frame();
    assert_eq!(scene.adapter().0, gray);
}
