use super::{to_js, Mount};
use crate::dom::{self, EventListener};
use crate::input::Bounds;
use crate::render::DotAdapter;
use anyhow::{anyhow, bail};
use folio_core::color::parse_stops;
use folio_core::constants::{DEFAULT_GRADIENT, DOT_SIZE, LOGO_RADIUS, SAMPLING_GRID_WIDTH};
use folio_core::logo::sampled_height;
use folio_core::{
    build_dots, ColorSource, DotLayout, Field, LogoMap, Rgb, SamplingOptions, Theme, Tuning,
};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Logo drawn as a dot grid on a canvas. Dots start gray, scatter from
/// the pointer and ease into their own color once touched.
#[wasm_bindgen]
pub struct LogoDots {
    mount: Mount<Rgb, DotAdapter>,
    reset_label: web::HtmlElement,
    _on_reset: EventListener,
}

#[wasm_bindgen]
impl LogoDots {
    /// Draws a precomputed map (the JSON `generateLogoMap` returns) onto
    /// `#canvas_id`. Malformed JSON draws nothing.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, map_json: &str, is_light: bool) -> Result<LogoDots, JsValue> {
        let map = LogoMap::from_json(map_json).unwrap_or_else(|e| {
            log::warn!("[logo] unusable dot map, drawing nothing: {}", e);
            LogoMap::default()
        });
        Self::mount(canvas_id, &map, Theme::from_light(is_light)).map_err(to_js)
    }

    /// Samples a loaded image directly instead of a precomputed map.
    #[wasm_bindgen(js_name = fromImage)]
    pub fn from_image(
        canvas_id: &str,
        image: &web::HtmlImageElement,
        grid_width: u32,
        threshold: u8,
        gradient: &str,
        use_image_colors: bool,
        spacing: f32,
        is_light: bool,
    ) -> Result<LogoDots, JsValue> {
        let options =
            sampling_options(grid_width, threshold, gradient, use_image_colors, spacing);
        let map = sample_image(image, &options).unwrap_or_else(|e| {
            log::warn!("[logo] could not sample image, drawing nothing: {:#}", e);
            LogoMap::default()
        });
        Self::mount(canvas_id, &map, Theme::from_light(is_light)).map_err(to_js)
    }

    pub fn reset(&self) {
        self.mount.reset();
    }

    #[wasm_bindgen(js_name = setLight)]
    pub fn set_light(&self, is_light: bool) {
        self.mount.set_theme(Theme::from_light(is_light));
    }

    #[wasm_bindgen(js_name = dotCount)]
    pub fn dot_count(&self) -> usize {
        self.mount.scene.borrow().field().len()
    }

    pub fn unmount(mut self) {
        self.mount.unmount();
    }
}

impl Drop for LogoDots {
    fn drop(&mut self) {
        self.reset_label.remove();
    }
}

impl LogoDots {
    fn mount(canvas_id: &str, map: &LogoMap, theme: Theme) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, canvas_id)?;

        let layout = DotLayout::for_map(map, DOT_SIZE);
        let size = layout.canvas_size(map);
        dom::size_canvas(&canvas, size.x.ceil() as u32, size.y.ceil() as u32);
        let ctx = dom::context_2d(&canvas)?;

        let dots = build_dots(map, &layout, &DEFAULT_GRADIENT);
        log::info!(
            "[logo] #{}: {} dots on a {}x{} grid",
            canvas_id,
            dots.len(),
            map.grid_width,
            map.grid_height
        );

        let adapter = DotAdapter::new(canvas.clone(), ctx, layout.dot_size);
        let mount = Mount::new(
            Field::new(dots, Tuning::default()),
            adapter,
            LOGO_RADIUS,
            theme,
            &canvas,
            Bounds::Unbounded,
        )?;
        let (reset_label, on_reset) = mount.reset_control(&document)?;
        dom::set_styles(&reset_label, &[("display", "block"), ("text-align", "center")]);
        canvas.after_with_node_1(&reset_label).map_err(dom::js_err)?;

        mount.start();
        Ok(Self {
            mount,
            reset_label,
            _on_reset: on_reset,
        })
    }
}

/// Samples a loaded image into dot-map JSON for `LogoDots`.
///
/// `gradient` is a comma separated color list; it is ignored when
/// `use_image_colors` is set. `spacing` is the gap factor stored in the
/// map; zero or less means the default.
#[wasm_bindgen(js_name = generateLogoMap)]
pub fn generate_logo_map(
    image: &web::HtmlImageElement,
    grid_width: u32,
    threshold: u8,
    gradient: &str,
    use_image_colors: bool,
    spacing: f32,
) -> Result<String, JsValue> {
    let options = sampling_options(grid_width, threshold, gradient, use_image_colors, spacing);
    sample_image(image, &options)
        .and_then(|map| map.to_json().map_err(Into::into))
        .map_err(to_js)
}

fn sampling_options(
    grid_width: u32,
    threshold: u8,
    gradient: &str,
    use_image_colors: bool,
    spacing: f32,
) -> SamplingOptions {
    let source = if use_image_colors {
        ColorSource::Image
    } else {
        let stops = match parse_stops(gradient) {
            Ok(stops) if !stops.is_empty() => stops,
            Ok(_) => DEFAULT_GRADIENT.to_vec(),
            Err(e) => {
                log::warn!("[logo] {}; using the default gradient", e);
                DEFAULT_GRADIENT.to_vec()
            }
        };
        ColorSource::Gradient(stops.into_iter().collect())
    };
    SamplingOptions {
        grid_width: if grid_width == 0 {
            SAMPLING_GRID_WIDTH
        } else {
            grid_width
        },
        brightness_threshold: threshold,
        source,
        spacing,
        ..SamplingOptions::default()
    }
}

/// Draws `image` scaled down to the sampling grid on an offscreen canvas
/// and reads its pixels back.
fn sample_image(
    image: &web::HtmlImageElement,
    options: &SamplingOptions,
) -> anyhow::Result<LogoMap> {
    let (natural_w, natural_h) = (image.natural_width(), image.natural_height());
    if !image.complete() || natural_w == 0 || natural_h == 0 {
        bail!("image is not loaded");
    }
    let width = options.grid_width;
    let height = sampled_height(natural_w, natural_h, width);
    if height == 0 {
        bail!("image {}x{} is too flat to sample", natural_w, natural_h);
    }

    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::create(&document, "canvas")?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = dom::context_2d(&canvas)?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        image,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )
    .map_err(dom::js_err)?;
    let data = ctx
        .get_image_data(0.0, 0.0, width as f64, height as f64)
        .map_err(dom::js_err)?;

    Ok(LogoMap::from_rgba(&data.data().0, width, height, options)?)
}
